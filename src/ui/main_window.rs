use fltk::{
    app::Sender,
    button::Button,
    enums::Color,
    frame::Frame,
    group::{Flex, FlexType, Group},
    prelude::*,
    window::Window,
};

use crate::app::messages::Message;
use crate::app::session::EditSession;
use crate::app::settings::AppSettings;
use crate::app::texts::Texts;

pub const TOOLBAR_HEIGHT: i32 = 40;
const FOOTER_HEIGHT: i32 = 18;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub symbol_button: Button,
    pub mode_button: Button,
    pub grid_area: Group,
}

pub fn build_main_window(
    texts: &'static Texts,
    settings: &AppSettings,
    session: &EditSession,
    sender: &Sender<Message>,
) -> MainWidgets {
    let mut wind = Window::new(
        100,
        100,
        settings.window_width,
        settings.window_height,
        texts.title,
    );
    wind.set_xclass("GridMark");

    let mut flex = Flex::new(0, 0, settings.window_width, settings.window_height, None);
    flex.set_type(FlexType::Column);

    // Toolbar: load button plus the two toggles
    let mut toolbar = Flex::new(0, 0, 0, TOOLBAR_HEIGHT, None);
    toolbar.set_type(FlexType::Row);
    toolbar.set_margin(5);

    let mut load_button = Button::new(0, 0, 0, 0, None);
    load_button.set_label(texts.load_csv);
    load_button.set_callback({
        let s = *sender;
        move |_| s.send(Message::LoadCsv)
    });
    toolbar.fixed(&load_button, 100);

    let symbol_label = Frame::new(0, 0, 0, 0, None).with_label(texts.symbol);
    toolbar.fixed(&symbol_label, 70);

    let mut symbol_button = Button::new(0, 0, 0, 0, None);
    symbol_button.set_label(session.symbol().glyph());
    symbol_button.set_callback({
        let s = *sender;
        move |_| s.send(Message::ToggleSymbol)
    });
    toolbar.fixed(&symbol_button, 50);

    let mode_label = Frame::new(0, 0, 0, 0, None).with_label(texts.mode);
    toolbar.fixed(&mode_label, 70);

    let mut mode_button = Button::new(0, 0, 0, 0, None);
    mode_button.set_label(texts.mode_label(session.mode()));
    mode_button.set_callback({
        let s = *sender;
        move |_| s.send(Message::ToggleMode)
    });
    toolbar.fixed(&mode_button, 90);

    // Flexible spacer keeps the controls packed to the left
    Frame::new(0, 0, 0, 0, None);

    toolbar.end();
    flex.fixed(&toolbar, TOOLBAR_HEIGHT);

    // The grid host takes all remaining space; the view rebuilds its
    // children on every load and repositions them on resize.
    let mut grid_area = Group::new(0, 0, 0, 0, None);
    grid_area.end();
    grid_area.resize_callback({
        let s = *sender;
        move |_, _, _, _, _| s.send(Message::ViewportResized)
    });

    let mut footer = Frame::new(0, 0, 0, 0, None);
    footer.set_label(concat!("GridMark ", env!("CARGO_PKG_VERSION")));
    footer.set_label_size(8);
    footer.set_label_color(Color::from_rgb(128, 128, 128));
    flex.fixed(&footer, FOOTER_HEIGHT);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    // Route the window close button through the dispatch loop so shutdown
    // housekeeping runs exactly once.
    wind.set_callback({
        let s = *sender;
        move |_| s.send(Message::Quit)
    });

    MainWidgets {
        wind,
        flex,
        symbol_button,
        mode_button,
        grid_area,
    }
}
