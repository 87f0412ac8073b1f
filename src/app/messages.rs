/// All messages that can be sent through the FLTK channel.
/// Each widget callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Open the file chooser and load the selected CSV.
    LoadCsv,
    /// Flip the active marker symbol (star/circle).
    ToggleSymbol,
    /// Flip the active edit mode (add/delete).
    ToggleMode,
    /// A body cell was activated at (row, col).
    CellClicked(usize, usize),
    /// The grid area changed size; re-run the sizing pass.
    ViewportResized,
    /// Window close requested.
    Quit,
}
