//! The play screen: one playthrough from the gate to the emergency exit.

use tracing::{error, info};

use fz_core::{Command, GamePhase, GameSession, Interaction};

use crate::app::AppState;
use crate::input;
use crate::layout::{Hit, PlayLayout};
use crate::theme::{
    CANVAS_H, CANVAS_W, TEXT_LARGE, TEXT_MEDIUM, TEXT_SMALL, TEXT_TINY, mouse_canvas_position, palette,
};
use crate::widget::button::{ButtonKind, draw_button};
use crate::widget::panel::{draw_overlay, draw_panel};
use crate::widget::text::wrap_text;

use super::{Screen, Transition};

/// Map a click to the command it issues, if any.
pub fn command_for(session: &GameSession, hit: Hit) -> Option<Command> {
    match hit {
        Hit::Interaction(i) => session
            .available_interactions()
            .get(i)
            .map(|&interaction| Command::Interact(interaction)),
        Hit::Item(i) => session.available_items().get(i).map(|&item| Command::Collect(item)),
        Hit::Exit(i) => session.available_exits().get(i).map(|&room| Command::Move(room)),
        Hit::InventorySlot(i) => session.inventory().slot(i).map(|item| Command::UseItem(item.id)),
    }
}

/// Play session screen state.
#[derive(Default)]
pub struct PlayScreen {
    /// The session, created on the first update.
    session: Option<GameSession>,
    /// Why the session could not be created.
    error: Option<String>,
}

impl PlayScreen {
    /// Create a new play screen.
    pub fn new() -> Self {
        Self::default()
    }

    fn initialize(&mut self, app: &AppState) {
        match GameSession::new(app.config.session_config()) {
            Ok(session) => {
                info!("new playthrough");
                self.session = Some(session);
            }
            Err(e) => {
                error!(error = %e, "cannot start session");
                self.error = Some(e.to_string());
            }
        }
    }

    fn draw_room(app: &AppState, session: &GameSession) {
        let Some(room) = session.current_room() else {
            return;
        };
        let font = &app.font;
        font.draw(&room.name, 50.0, 50.0 + TEXT_LARGE as f32, TEXT_LARGE, palette::WHITE);

        let lines = wrap_text(&room.description, CANVAS_W - 400.0, |s| font.width(s, TEXT_MEDIUM));
        for (i, line) in lines.iter().enumerate() {
            let y = 120.0 + i as f32 * 35.0 + TEXT_MEDIUM as f32;
            font.draw(line, 50.0, y, TEXT_MEDIUM, palette::WHITE);
        }
    }

    fn draw_inventory(app: &AppState, session: &GameSession, layout: &PlayLayout, mouse: (f32, f32)) {
        let font = &app.font;
        let panel = &layout.inventory_panel;
        draw_panel(panel);
        font.draw("인벤토리", panel.x + 10.0, panel.y + 10.0 + TEXT_MEDIUM as f32, TEXT_MEDIUM, palette::WHITE);

        for (row, item) in layout.inventory_rows.iter().zip(session.inventory().items()) {
            let hovered = row.contains(mouse.0, mouse.1);
            let color = if hovered { palette::YELLOW } else { palette::WHITE };
            let label = format!("• {}", item.name());
            font.draw(&label, row.x + 20.0, row.y + TEXT_SMALL as f32 - 4.0, TEXT_SMALL, color);
            if hovered {
                let lines = wrap_text(item.description(), panel.w - 20.0, |s| font.width(s, TEXT_TINY));
                let base = panel.y + panel.h + 20.0;
                for (i, line) in lines.iter().enumerate() {
                    font.draw(line, panel.x + 10.0, base + i as f32 * 20.0, TEXT_TINY, palette::YELLOW);
                }
            }
        }
    }

    fn draw_buttons(app: &AppState, session: &GameSession, layout: &PlayLayout, mouse: (f32, f32)) {
        let font = &app.font;
        let hover = |r: &crate::widget::Rect2| r.contains(mouse.0, mouse.1);

        let satisfiable: Vec<Interaction> = session.satisfiable_interactions();
        for (area, interaction) in layout.interactions.iter().zip(session.available_interactions()) {
            let hint = satisfiable.contains(interaction);
            draw_button(font, interaction.label(), area, ButtonKind::Action, hover(area), hint);
        }

        if !layout.items.is_empty() {
            let header_y = layout.items[0].y - 10.0;
            font.draw("획득 가능한 아이템:", 50.0, header_y, TEXT_MEDIUM, palette::YELLOW);
        }
        for (area, item) in layout.items.iter().zip(session.available_items()) {
            draw_button(font, item.name(), area, ButtonKind::Pickup, hover(area), false);
        }

        font.draw(
            "이동 가능한 곳:",
            300.0,
            CANVAS_H - 200.0 + TEXT_MEDIUM as f32 - 6.0,
            TEXT_MEDIUM,
            palette::GREEN,
        );
        for (area, &exit) in layout.exits.iter().zip(session.available_exits()) {
            let name = session.room(exit).map_or(exit.key(), |r| r.name.as_str());
            draw_button(font, name, area, ButtonKind::Pickup, hover(area), false);
        }
    }

    fn draw_message(app: &AppState, session: &GameSession, layout: &PlayLayout) {
        let Some(message) = session.message() else {
            return;
        };
        draw_panel(&layout.message_box);
        let (cx, cy) = layout.message_box.center();
        app.font.draw_centered(&message.text, cx, cy, TEXT_SMALL, palette::WHITE);
    }

    fn draw_ending(app: &AppState) {
        draw_overlay();
        let cx = CANVAS_W / 2.0;
        let cy = CANVAS_H / 2.0;
        app.font.draw_centered("탈출 성공!", cx, cy - 50.0, TEXT_LARGE, palette::GREEN);
        app.font
            .draw_centered("폐병원에서 무사히 탈출했다.", cx, cy, TEXT_MEDIUM, palette::WHITE);
        app.font.draw_centered(
            "클릭하면 메인 메뉴로 돌아갑니다",
            cx,
            cy + 50.0,
            TEXT_SMALL,
            palette::GRAY,
        );
    }
}

impl Screen for PlayScreen {
    fn update(&mut self, app: &mut AppState) -> Transition {
        if self.session.is_none() && self.error.is_none() {
            self.initialize(app);
        }
        if input::escape_pressed() {
            return Transition::Pop;
        }
        let Some(session) = &mut self.session else {
            return if input::clicked() { Transition::Pop } else { Transition::None };
        };

        session.tick_message();
        if !input::clicked() {
            return Transition::None;
        }

        if session.phase() == GamePhase::Escaped {
            session.acknowledge();
            info!("ending acknowledged, back to the menu");
            return Transition::Pop;
        }

        let (mx, my) = mouse_canvas_position();
        let layout = PlayLayout::for_session(session);
        if let Some(command) = layout.hit(mx, my).and_then(|hit| command_for(session, hit)) {
            session.execute(command);
        }
        Transition::None
    }

    fn draw(&self, app: &AppState) {
        let Some(session) = &self.session else {
            let message = self.error.as_deref().unwrap_or("");
            app.font.draw_centered(message, CANVAS_W / 2.0, CANVAS_H / 2.0, TEXT_SMALL, palette::RED);
            return;
        };

        let mouse = mouse_canvas_position();
        let layout = PlayLayout::for_session(session);

        app.backgrounds.draw(session.location());
        Self::draw_room(app, session);
        Self::draw_inventory(app, session, &layout, mouse);
        Self::draw_buttons(app, session, &layout, mouse);
        Self::draw_message(app, session, &layout);

        if session.phase() == GamePhase::Escaped {
            Self::draw_ending(app);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fz_core::{ItemId, RoomId, SessionConfig};

    #[test]
    fn clicks_map_to_commands() {
        let mut session = GameSession::hospital().unwrap();
        assert_eq!(
            command_for(&session, Hit::Item(0)),
            Some(Command::Collect(ItemId::Key))
        );
        assert_eq!(
            command_for(&session, Hit::Interaction(0)),
            Some(Command::Interact(Interaction::OpenGate))
        );
        assert_eq!(command_for(&session, Hit::Exit(0)), None);
        assert_eq!(command_for(&session, Hit::InventorySlot(0)), None);

        session.collect("열쇠");
        assert_eq!(
            command_for(&session, Hit::InventorySlot(0)),
            Some(Command::UseItem(ItemId::Key))
        );
    }

    #[test]
    fn exits_follow_room_order() {
        let session = GameSession::new(SessionConfig::default().with_start(RoomId::Corridor)).unwrap();
        assert_eq!(
            command_for(&session, Hit::Exit(2)),
            Some(Command::Move(RoomId::Operating))
        );
    }
}
