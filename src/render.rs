// src/render.rs
//! 描画の窓口。実際の描画 (Canvas など) は `Renderer` を実装した側がやるよ。
//! ここは「何をどこに描くか」を決めるだけ。

use crate::components::card::Card;
use crate::components::position::Size;
use crate::config::layout::EMPTY_ZONE_BORDER;
use crate::controller::GameController;
use crate::zones::{Zone, ZoneKind};

/// 描画係にお願いできること。
pub trait Renderer {
    /// 名前付きの画像を矩形に描く。
    fn draw_texture(&mut self, texture: &str, x: f32, y: f32, width: f32, height: f32);
    /// 空のゾーンの枠を描く。
    fn draw_empty_zone(&mut self, x: f32, y: f32, width: f32, height: f32, thickness: f32);
}

/// 1フレームぶん描く。ゾーン → 持ち上げ中のカード → 飛んでいるカード の順 (後ろほど手前)。
pub fn draw_game<R: Renderer + ?Sized>(renderer: &mut R, controller: &GameController) {
    let back = controller.config().card_back_texture();
    let board = controller.board();

    for zone in board.playing_zones() {
        draw_zone(renderer, zone, &back);
    }

    let selection = controller.selection();
    let card_size = selection.card_size();
    for card in selection.cards() {
        draw_card(renderer, card, card_size, &back);
    }

    for animation in controller.animations() {
        for card in animation.cards() {
            draw_card(renderer, card, card_size, &back);
        }
    }
}

fn draw_zone<R: Renderer + ?Sized>(renderer: &mut R, zone: &Zone, back: &str) {
    if zone.is_empty() {
        let (pos, size) = (zone.position(), zone.card_size());
        renderer.draw_empty_zone(pos.x, pos.y, size.width, size.height, EMPTY_ZONE_BORDER);
        return;
    }
    let cards = match zone.kind() {
        // 捨て札は窓の中だけ (古いカードは窓の一番下のカードの真下に隠れてる)
        ZoneKind::Discard { .. } => zone.visible_cards(),
        // 山札は一番上だけで十分
        ZoneKind::Deck => &zone.cards()[zone.len() - 1..],
        _ => zone.cards(),
    };
    for card in cards {
        draw_card(renderer, card, zone.card_size(), back);
    }
}

fn draw_card<R: Renderer + ?Sized>(renderer: &mut R, card: &Card, size: Size, back: &str) {
    let texture = if card.is_face_up { card.texture_name() } else { back.to_string() };
    renderer.draw_texture(&texture, card.position.x, card.position.y, size.width, size.height);
}
