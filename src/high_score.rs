// src/high_score.rs
//! ハイスコア表。1行に `score,date` の形で、点数の高い順に上位5件だけ残す。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HighScoreError;

pub const MAX_HIGH_SCORES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    pub score: u32,
    pub date: String,
}

impl HighScore {
    pub fn new(score: u32, date: impl Into<String>) -> Self {
        Self {
            score,
            date: date.into(),
        }
    }
}

impl fmt::Display for HighScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.score, self.date)
    }
}

impl FromStr for HighScore {
    type Err = HighScoreError;

    /// 行番号は分からないので 0。表として読むときは `HighScoreTable::parse` を使ってね。
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        parse_line(0, line)
    }
}

fn parse_line(line_no: usize, line: &str) -> Result<HighScore, HighScoreError> {
    let (score, date) = line.split_once(',').ok_or_else(|| HighScoreError::MalformedLine {
        line_no,
        line: line.to_string(),
    })?;
    let score = score
        .trim()
        .parse::<u32>()
        .map_err(|source| HighScoreError::InvalidScore { line_no, source })?;
    Ok(HighScore::new(score, date.trim()))
}

/// 上位5件。いつでも点数の高い順 (同点なら先に入った方が上)。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreTable {
    entries: Vec<HighScore>,
}

impl HighScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1行1件のテキストを読む。空行は読み飛ばす。
    pub fn parse(text: &str) -> Result<Self, HighScoreError> {
        let mut table = Self::new();
        for (i, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            table.insert(parse_line(i + 1, line)?);
        }
        Ok(table)
    }

    pub fn to_text(&self) -> String {
        self.entries.iter().map(|e| format!("{}\n", e)).collect()
    }

    pub fn entries(&self) -> &[HighScore] {
        &self.entries
    }

    /// この点数なら表に載るか。
    pub fn qualifies(&self, score: u32) -> bool {
        self.entries.len() < MAX_HIGH_SCORES || self.entries.iter().any(|e| score > e.score)
    }

    /// 記録する。表に載ったら `true`。
    pub fn record(&mut self, entry: HighScore) -> bool {
        if !self.qualifies(entry.score) {
            return false;
        }
        self.insert(entry);
        true
    }

    fn insert(&mut self, entry: HighScore) {
        let at = self.entries.partition_point(|e| e.score >= entry.score);
        self.entries.insert(at, entry);
        self.entries.truncate(MAX_HIGH_SCORES);
    }
}
