//! Main menu: start a new game or quit.

use crate::app::AppState;
use crate::input;
use crate::theme::{CANVAS_H, CANVAS_W, TEXT_LARGE, TEXT_MEDIUM, TEXT_SMALL, mouse_canvas_position, palette};
use crate::widget::Rect2;
use crate::widget::button::{ButtonKind, button_colors};
use crate::widget::bordered_rect;

use super::{Screen, ScreenId, Transition};

/// A main menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Begin a fresh playthrough.
    Start,
    /// Leave the game.
    Quit,
}

impl MenuChoice {
    /// Menu entries top to bottom.
    pub const ALL: [MenuChoice; 2] = [MenuChoice::Start, MenuChoice::Quit];

    /// Entry label.
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Start => "게임 시작",
            MenuChoice::Quit => "게임 종료",
        }
    }
}

/// Selection state of the main menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MainMenu {
    selected: usize,
}

impl MainMenu {
    /// Menu with the first entry selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// The highlighted entry.
    pub fn selected(&self) -> MenuChoice {
        MenuChoice::ALL[self.selected]
    }

    /// Move the highlight up, wrapping to the bottom.
    pub fn up(&mut self) {
        self.selected = (self.selected + MenuChoice::ALL.len() - 1) % MenuChoice::ALL.len();
    }

    /// Move the highlight down, wrapping to the top.
    pub fn down(&mut self) {
        self.selected = (self.selected + 1) % MenuChoice::ALL.len();
    }

    /// Clickable area of the `index`-th entry.
    pub fn entry_rect(index: usize) -> Rect2 {
        Rect2::centered(CANVAS_W / 2.0, CANVAS_H / 2.0 + index as f32 * 60.0, 300.0, 52.0)
    }

    /// The entry under a point, highlighting it.
    pub fn hover(&mut self, x: f32, y: f32) -> Option<MenuChoice> {
        let index = (0..MenuChoice::ALL.len()).find(|&i| Self::entry_rect(i).contains(x, y))?;
        self.selected = index;
        Some(MenuChoice::ALL[index])
    }
}

/// Title screen state.
#[derive(Default)]
pub struct TitleScreen {
    menu: MainMenu,
}

impl TitleScreen {
    /// Create a new title screen.
    pub fn new() -> Self {
        Self::default()
    }

    fn choose(choice: MenuChoice, app: &mut AppState) -> Transition {
        match choice {
            MenuChoice::Start => Transition::Push(ScreenId::Play),
            MenuChoice::Quit => {
                app.should_quit = true;
                Transition::None
            }
        }
    }
}

impl Screen for TitleScreen {
    fn update(&mut self, app: &mut AppState) -> Transition {
        if input::escape_pressed() {
            app.should_quit = true;
            return Transition::None;
        }
        if input::up_pressed() {
            self.menu.up();
        }
        if input::down_pressed() {
            self.menu.down();
        }

        let (mx, my) = mouse_canvas_position();
        let hovered = self.menu.hover(mx, my);
        if let Some(choice) = hovered.filter(|_| input::clicked()) {
            return Self::choose(choice, app);
        }
        if input::enter_pressed() {
            return Self::choose(self.menu.selected(), app);
        }
        Transition::None
    }

    fn draw(&self, app: &AppState) {
        let font = &app.font;
        font.draw_centered("금지 구역", CANVAS_W / 2.0, CANVAS_H / 3.0, TEXT_LARGE, palette::RED);
        font.draw_centered(
            "폐병원 방탈출",
            CANVAS_W / 2.0,
            CANVAS_H / 3.0 + 60.0,
            TEXT_MEDIUM,
            palette::WHITE,
        );

        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            let area = MainMenu::entry_rect(i);
            let selected = self.menu.selected() == *choice;
            let color = if selected {
                let (fill, border, _) = button_colors(ButtonKind::Action, true);
                bordered_rect(&area.inset(6.0), fill, border, 3.0);
                palette::RED
            } else {
                palette::WHITE
            };
            let (cx, cy) = area.center();
            font.draw_centered(choice.label(), cx, cy, TEXT_MEDIUM, color);
        }

        font.draw_centered(
            "방향키 또는 마우스로 선택, Enter 또는 클릭으로 확인",
            CANVAS_W / 2.0,
            CANVAS_H - 50.0,
            TEXT_SMALL,
            palette::GRAY,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_wrap() {
        let mut menu = MainMenu::new();
        assert_eq!(menu.selected(), MenuChoice::Start);
        menu.up();
        assert_eq!(menu.selected(), MenuChoice::Quit);
        menu.down();
        assert_eq!(menu.selected(), MenuChoice::Start);
        menu.down();
        menu.down();
        assert_eq!(menu.selected(), MenuChoice::Start);
    }

    #[test]
    fn hover_selects_entry() {
        let mut menu = MainMenu::new();
        let (cx, cy) = MainMenu::entry_rect(1).center();
        assert_eq!(menu.hover(cx, cy), Some(MenuChoice::Quit));
        assert_eq!(menu.selected(), MenuChoice::Quit);

        assert_eq!(menu.hover(10.0, 10.0), None);
        assert_eq!(menu.selected(), MenuChoice::Quit);
    }

    #[test]
    fn labels() {
        let labels: Vec<_> = MenuChoice::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, ["게임 시작", "게임 종료"]);
    }
}
