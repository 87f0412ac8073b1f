use fltk::dialog;

/// Show the native open-file chooser. Returns `None` when the user cancels,
/// in which case the caller leaves all prior state untouched.
pub fn native_open_dialog(title: &str, pattern: &str, start_dir: Option<&str>) -> Option<String> {
    dialog::file_chooser(title, pattern, start_dir.unwrap_or("."), false)
}
