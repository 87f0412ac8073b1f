use std::path::Path;

use fltk::{app, dialog, prelude::*};

use grid_mark::app::{
    AppSettings, ClickOutcome, EditSession, Lang, Message, TableStore, Texts, apply_click,
};
use grid_mark::ui::file_dialogs::native_open_dialog;
use grid_mark::ui::grid_view::GridView;
use grid_mark::ui::main_window::build_main_window;

fn main() {
    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let mut settings = AppSettings::load();
    let texts = Texts::for_lang(Lang::detect());
    let mut session = EditSession::default();

    let mut widgets = build_main_window(texts, &settings, &session, &sender);
    widgets.wind.show();

    let mut grid_view = GridView::new(widgets.grid_area.clone());
    let mut table: Option<TableStore> = None;

    while app.wait() {
        let Some(msg) = receiver.recv() else { continue };
        match msg {
            Message::LoadCsv => {
                let start_dir = settings.last_open_directory.clone();
                let Some(path) =
                    native_open_dialog(texts.file_prompt, "*.csv", start_dir.as_deref())
                else {
                    continue;
                };
                match TableStore::load(Path::new(&path)) {
                    Ok(loaded) => {
                        if let Some(dir) = Path::new(&path).parent().and_then(|p| p.to_str()) {
                            settings.last_open_directory = Some(dir.to_string());
                            if let Err(e) = settings.save() {
                                eprintln!("Failed to save settings: {}", e);
                            }
                        }
                        grid_view.full_redraw(&loaded, &sender);
                        table = Some(loaded);
                    }
                    Err(e) => dialog::alert_default(&format!("{}: {}", texts.load_failed, e)),
                }
            }
            Message::ToggleSymbol => {
                session.toggle_symbol();
                widgets.symbol_button.set_label(session.symbol().glyph());
            }
            Message::ToggleMode => {
                session.toggle_mode();
                widgets.mode_button.set_label(texts.mode_label(session.mode()));
            }
            Message::CellClicked(row, col) => {
                let Some(store) = table.as_mut() else { continue };
                match apply_click(store, &session, row, col) {
                    Ok(ClickOutcome::Updated) => {
                        // The in-memory edit stands even when the save fails;
                        // the redraw keeps the screen consistent with memory.
                        if let Err(e) = store.save() {
                            dialog::alert_default(&format!("{}: {}", texts.save_failed, e));
                        }
                        grid_view.full_redraw(store, &sender);
                    }
                    Ok(ClickOutcome::Ignored) => {}
                    Err(e) => dialog::alert_default(&e.to_string()),
                }
            }
            Message::ViewportResized => grid_view.rescale(),
            Message::Quit => {
                settings.window_width = widgets.wind.w();
                settings.window_height = widgets.wind.h();
                if let Err(e) = settings.save() {
                    eprintln!("Failed to save settings: {}", e);
                }
                app.quit();
            }
        }
    }
}
