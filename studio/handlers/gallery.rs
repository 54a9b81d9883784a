use std::io::Cursor;
use tiny_http::Response;

use petalset::viewer::encode_png;
use petalset::{Dataset, Error, GridCell, LoadReport};

use crate::render::{html_escape, render_page};
use crate::state::SharedState;

/// Displayed tile size in CSS pixels, independent of the stored image size.
const TILE_PX: u32 = 240;

// ---------------------------------------------------------------------------
// GET /grid
// ---------------------------------------------------------------------------

/// Draws a fresh random grid on every request.
pub fn handle_get(state: SharedState) -> Response<Cursor<Vec<u8>>> {
    crate::routes::html_response(grid_page(&state))
}

fn grid_page(state: &SharedState) -> String {
    let mut st = state.lock().unwrap();
    let picked = st.repick();
    let total  = st.dataset.len();
    let failed = st.failure_count();
    let cols   = st.layout.cols;
    let counts = build_counts_html(&st.dataset, &st.reports);
    drop(st);

    let grid_html = match picked {
        Ok(grid) => build_grid_html(grid.cells()),
        Err(Error::EmptyDataset) => {
            r#"<p class="error">No samples were loaded, so there is nothing to show.</p>"#.to_owned()
        }
        Err(e) => format!(r#"<p class="error">{}</p>"#, html_escape(&e.to_string())),
    };

    let failed_note = if failed > 0 {
        format!(r#", <span class="error">{} file(s) failed to load</span>"#, failed)
    } else {
        String::new()
    };

    render_page(total, |tmpl| {
        tmpl
            .replace("{{COLS}}", &cols.to_string())
            .replace("{{TILE}}", &TILE_PX.to_string())
            .replace("{{FAILED_NOTE}}", &failed_note)
            .replace("{{GRID}}", &grid_html)
            .replace("{{COUNTS}}", &counts)
    })
}

// ---------------------------------------------------------------------------
// GET /grid.png
// ---------------------------------------------------------------------------

/// The grid last shown by `/grid`, composed into one PNG.
pub fn handle_png(state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let mut st = state.lock().unwrap();
    let composed = match st.current_or_pick() {
        Ok(grid) => grid.compose(&st.dataset),
        Err(e)   => Err(e),
    };
    drop(st);
    let png = composed.and_then(|img| encode_png(&img));

    match png {
        Ok(bytes) => crate::routes::png_response(bytes),
        Err(Error::EmptyDataset) => crate::routes::not_found(),
        Err(e) => {
            log::error!("Failed to render grid: {}", e);
            crate::routes::server_error(&e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn build_grid_html(cells: &[GridCell]) -> String {
    let cells: String = cells.iter().map(|cell| {
        format!(
            r#"<figure><figcaption>{caption}</figcaption><img src="/samples/{index}.png" alt="{caption}"></figure>"#,
            caption = html_escape(&cell.caption()),
            index   = cell.index,
        )
    }).collect();
    format!(r#"<div class="grid">{}</div>"#, cells)
}

fn build_counts_html(dataset: &Dataset, reports: &[LoadReport]) -> String {
    let counts = dataset.count_by_category();
    let rows: String = reports.iter().map(|r| {
        format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            r.category,
            counts.get(&r.category).copied().unwrap_or(0),
            r.failures.len(),
            html_escape(&r.directory.display().to_string()),
        )
    }).collect();

    format!(
        r#"<table>
  <thead><tr><th>Category</th><th>Samples</th><th>Failed</th><th>Directory</th></tr></thead>
  <tbody>{}</tbody>
</table>"#,
        rows
    )
}
