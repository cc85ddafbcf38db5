use crate::{
    grid::{Grid, N},
    solver::solve,
};
use axum::{http::StatusCode, routing::post, Json, Router};
use log::debug;

pub fn router() -> Router {
    Router::new().route("/solve", post(solve_endpoint))
}

/// Parses the posted board, runs the solver, and answers with the solved
/// board as 9 rows of 9 digits. The search is CPU-bound, so it runs on the
/// blocking pool rather than the async runtime.
async fn solve_endpoint(body: String) -> Result<Json<[[u8; N]; N]>, (StatusCode, String)> {
    let mut grid = Grid::from_text(&body).map_err(|err| {
        debug!("Rejecting request: {err}");
        (StatusCode::BAD_REQUEST, err.to_string())
    })?;
    let solved = tokio::task::spawn_blocking(move || {
        let found = solve(&mut grid);
        (found, grid)
    })
    .await
    .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?;
    match solved {
        (true, grid) => {
            debug!("Solved board:\n{grid}");
            Ok(Json(grid.rows()))
        }
        (false, _) => {
            debug!("No solution found");
            Err((StatusCode::UNPROCESSABLE_ENTITY, "No solution found".to_string()))
        }
    }
}
