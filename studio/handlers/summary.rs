use std::collections::BTreeMap;
use std::io::Cursor;

use serde::Serialize;
use tiny_http::Response;

use petalset::{Category, LoadReport};

use crate::state::SharedState;

#[derive(Serialize)]
struct Summary<'a> {
    total:       usize,
    image_size:  Option<u32>,
    counts:      BTreeMap<Category, usize>,
    reports:     &'a [LoadReport],
}

/// `GET /summary.json`
///
/// Sample counts per category plus the full load reports, failures included.
pub fn handle_get(state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let st = state.lock().unwrap();
    let summary = Summary {
        total:      st.dataset.len(),
        image_size: st.dataset.images().first().map(|img| img.width()),
        counts:     st.dataset.count_by_category(),
        reports:    &st.reports,
    };
    let body = serde_json::to_string_pretty(&summary);
    drop(st);

    match body {
        Ok(json) => crate::routes::json_response(json),
        Err(e)   => crate::routes::server_error(&e.to_string()),
    }
}
