use super::error::Result;
use super::session::{EditMode, EditSession, Marker};
use super::table::TableStore;

/// Whether a click changed the grid. The event loop saves and redraws only
/// on `Updated`; `Ignored` clicks leave disk and screen alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Updated,
    Ignored,
}

/// Apply one cell click against the current session state.
///
/// Row 0 and column 0 are header labels and immune to edits. Add mode only
/// fills empty cells; Delete mode only clears marker cells. Everything else
/// is a no-op, so rapid repeated clicking is safe and stateless per cell.
pub fn apply_click(
    table: &mut TableStore,
    session: &EditSession,
    row: usize,
    col: usize,
) -> Result<ClickOutcome> {
    if row == 0 || col == 0 {
        return Ok(ClickOutcome::Ignored);
    }

    let current = table.cell(row, col)?.to_string();
    match session.mode() {
        EditMode::Add if current.is_empty() => {
            table.set_cell(row, col, session.symbol().glyph().to_string())?;
            Ok(ClickOutcome::Updated)
        }
        EditMode::Delete if Marker::from_cell(&current).is_some() => {
            table.set_cell(row, col, String::new())?;
            Ok(ClickOutcome::Updated)
        }
        _ => Ok(ClickOutcome::Ignored),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::error::AppError;
    use std::fs;

    fn store_from(content: &str) -> (tempfile::TempDir, TableStore) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.csv");
        fs::write(&path, content).unwrap();
        let store = TableStore::load(&path).unwrap();
        (dir, store)
    }

    fn cells(store: &TableStore) -> Vec<Vec<String>> {
        store.grid().to_vec()
    }

    #[test]
    fn test_add_on_empty_cell_sets_active_symbol() {
        let (_dir, mut store) = store_from(",C1,C2\nR1,,\n");
        let mut session = EditSession::default();
        session.toggle_symbol(); // star

        let outcome = apply_click(&mut store, &session, 1, 1).unwrap();
        assert_eq!(outcome, ClickOutcome::Updated);
        assert_eq!(
            cells(&store),
            vec![
                vec!["".to_string(), "C1".to_string(), "C2".to_string()],
                vec!["R1".to_string(), "★".to_string(), "".to_string()],
            ]
        );
    }

    #[test]
    fn test_add_on_filled_cell_is_noop() {
        let (_dir, mut store) = store_from(",C1\nR1,⬤\n");
        let session = EditSession::default();

        let outcome = apply_click(&mut store, &session, 1, 1).unwrap();
        assert_eq!(outcome, ClickOutcome::Ignored);
        assert_eq!(store.cell(1, 1).unwrap(), "⬤");
    }

    #[test]
    fn test_delete_clears_either_marker() {
        let (_dir, mut store) = store_from(",C1,C2\nR1,★,⬤\n");
        let mut session = EditSession::default();
        session.toggle_mode(); // delete

        assert_eq!(
            apply_click(&mut store, &session, 1, 1).unwrap(),
            ClickOutcome::Updated
        );
        assert_eq!(
            apply_click(&mut store, &session, 1, 2).unwrap(),
            ClickOutcome::Updated
        );
        assert_eq!(store.cell(1, 1).unwrap(), "");
        assert_eq!(store.cell(1, 2).unwrap(), "");
    }

    #[test]
    fn test_delete_on_empty_cell_is_noop() {
        let (_dir, mut store) = store_from(",C1\nR1,\n");
        let mut session = EditSession::default();
        session.toggle_mode();

        let outcome = apply_click(&mut store, &session, 1, 1).unwrap();
        assert_eq!(outcome, ClickOutcome::Ignored);
        assert_eq!(store.cell(1, 1).unwrap(), "");
    }

    #[test]
    fn test_delete_leaves_non_marker_text_alone() {
        // Body cells should only ever hold markers, but a hand-edited file
        // can contain anything; Delete must not eat it.
        let (_dir, mut store) = store_from(",C1\nR1,note\n");
        let mut session = EditSession::default();
        session.toggle_mode();

        let outcome = apply_click(&mut store, &session, 1, 1).unwrap();
        assert_eq!(outcome, ClickOutcome::Ignored);
        assert_eq!(store.cell(1, 1).unwrap(), "note");
    }

    #[test]
    fn test_header_row_and_column_are_immune() {
        let (_dir, mut store) = store_from(",C1,C2\nR1,,\nR2,,\n");
        let before = cells(&store);
        let session = EditSession::default();

        for col in 0..3 {
            assert_eq!(
                apply_click(&mut store, &session, 0, col).unwrap(),
                ClickOutcome::Ignored
            );
        }
        for row in 0..3 {
            assert_eq!(
                apply_click(&mut store, &session, row, 0).unwrap(),
                ClickOutcome::Ignored
            );
        }
        assert_eq!(cells(&store), before);
    }

    #[test]
    fn test_out_of_range_click_is_index_error() {
        let (_dir, mut store) = store_from(",C1\nR1,\n");
        let session = EditSession::default();

        let err = apply_click(&mut store, &session, 5, 5).unwrap_err();
        assert!(matches!(err, AppError::Index { row: 5, col: 5 }));
    }

    #[test]
    fn test_add_then_save_round_trips() {
        let (_dir, mut store) = store_from(",C1,C2\nR1,,\n");
        let session = EditSession::default();

        apply_click(&mut store, &session, 1, 2).unwrap();
        store.save().unwrap();

        let reloaded = TableStore::load(store.path()).unwrap();
        assert_eq!(reloaded.cell(1, 2).unwrap(), "⬤");
        assert_eq!(reloaded.cell(1, 1).unwrap(), "");
        assert_eq!(reloaded.cell(0, 1).unwrap(), "C1");
    }
}
