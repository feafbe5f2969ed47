//! Integration tests for the region gradient average.

use campo_grid::{Grid2D, GridError, Region};

fn field() -> Grid2D<f32> {
    Grid2D::from_rows(&[[10.0f32, 8.0, 5.0], [12.0, 9.0, 6.0], [15.0, 11.0, 7.0]]).unwrap()
}

fn point_gradient(g: &Grid2D<f32>, i: usize, j: usize) -> f64 {
    let here = g.get(i, j).unwrap() as f64;
    let right = g.get(i, j + 1).unwrap() as f64;
    let below = g.get(i + 1, j).unwrap() as f64;
    ((right - here).abs() + (below - here).abs()) / 2.0
}

// ---------------------------------------------------------------------------
// Values
// ---------------------------------------------------------------------------

#[test]
fn full_region_matches_formula() {
    let grid = field();
    let points = [(0, 0), (0, 1), (1, 0), (1, 1)];
    let expected = points
        .iter()
        .map(|&(i, j)| point_gradient(&grid, i, j))
        .sum::<f64>()
        / points.len() as f64;

    let mean = grid.mean_gradient(&Region::new(0, 3, 0, 3)).unwrap();
    assert_eq!(mean.points, 4);
    assert!((mean.exact - expected).abs() < 1e-12);
    assert!((mean.value - expected as f32).abs() < 1e-6);
}

#[test]
fn sub_region_only_uses_its_own_points() {
    let grid = field();
    let mean = grid.mean_gradient(&Region::new(1, 3, 1, 3)).unwrap();
    assert_eq!(mean.points, 1);
    assert!((mean.exact - point_gradient(&grid, 1, 1)).abs() < 1e-12);
}

#[test]
fn integer_mean_truncates_once_at_the_end() {
    let mut grid: Grid2D<i32> = Grid2D::new(2, 4).unwrap();
    for i in 0..2 {
        for j in 0..4 {
            grid.set(i, j, ((i + 1) * 10 + j) as i32).unwrap();
        }
    }
    // each interior point: (|1| + |10|) / 2 = 5.5
    let mean = grid.mean_gradient(&Region::full(2, 4)).unwrap();
    assert_eq!(mean.points, 3);
    assert_eq!(mean.exact, 5.5);
    assert_eq!(mean.value, 5);

    let floats = Grid2D::from_shape_vec(
        (2, 4),
        grid.as_slice().iter().map(|&v| v as f64).collect(),
    )
    .unwrap();
    assert_eq!(floats.mean_gradient(&Region::full(2, 4)).unwrap().value, 5.5);
}

// ---------------------------------------------------------------------------
// Region validation
// ---------------------------------------------------------------------------

#[test]
fn malformed_regions_are_invalid() {
    let grid = field();
    let bad = [
        Region::new(0, 4, 0, 3),
        Region::new(0, 3, 0, 4),
        Region::new(2, 2, 0, 3),
        Region::new(2, 1, 0, 3),
        Region::new(0, 3, 3, 3),
        Region::new(0, 3, 2, 1),
    ];
    for region in bad {
        assert_eq!(
            grid.mean_gradient(&region),
            Err(GridError::InvalidRegion {
                region,
                rows: 3,
                cols: 3
            })
        );
        assert_eq!(grid.mean_gradient_or_zero(&region), 0.0);
    }
}

#[test]
fn thin_region_is_empty_not_invalid() {
    let grid = field();
    for region in [Region::new(0, 1, 0, 3), Region::new(0, 3, 2, 3)] {
        let err = grid.mean_gradient(&region).unwrap_err();
        assert_eq!(err, GridError::EmptyRegion { region });
        assert!(err.is_informational());
        assert_eq!(grid.mean_gradient_or_zero(&region), 0.0);
    }
}

#[test]
fn null_state_region_is_invalid() {
    let grid: Grid2D<i32> = Grid2D::empty();
    assert!(matches!(
        grid.mean_gradient(&Region::new(0, 1, 0, 1)),
        Err(GridError::InvalidRegion { .. })
    ));
}

#[test]
fn offset_rectangular_region_uses_interior_points() {
    let grid = field();
    let region = Region::new(1, 3, 0, 3);
    let expected = (point_gradient(&grid, 1, 0) + point_gradient(&grid, 1, 1)) / 2.0;

    let mean = grid.mean_gradient(&region).unwrap();
    assert_eq!(mean.points, region.interior_points());
    assert_eq!(mean.points, 2);
    assert!((mean.exact - expected).abs() < 1e-12);
}
