use campo_grid::config::DisplayConfig;
use campo_grid::report::render;
use campo_grid::{Grid2D, Region};

fn main() {
    env_logger::init();

    // Elevation samples on a 3x3 patch
    let mut elevation = Grid2D::from_rows(&[
        [10.0f64, 8.0, 5.0],
        [12.0, 9.0, 6.0],
        [15.0, 11.0, 7.0],
    ])
    .expect("failed to create elevation grid");

    println!("Elevation:\n{}", elevation);
    match elevation.mean_gradient(&Region::full(3, 3)) {
        Ok(mean) => println!("Mean gradient over {} points: {}", mean.points, mean.value),
        Err(e) => eprintln!("{}", e),
    }

    elevation.resize(4, 4).expect("failed to grow grid");
    println!("{}", render(&elevation, &DisplayConfig::new(" ", false, Some(1))));
}
