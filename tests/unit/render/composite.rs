use super::*;
use crate::engine::xorshift::XorshiftLanes;

fn test_palette() -> Palette {
    Palette {
        background: Rgb::new(255, 255, 255),
        foreground: Rgb::new(10, 20, 30),
        spot: Rgb::new(200, 100, 50),
    }
}

#[test]
fn palette_maps_every_cell_kind() {
    let palette = test_palette();
    assert_eq!(palette.color_of(Cell::Background), palette.background);
    assert_eq!(palette.color_of(Cell::Foreground), palette.foreground);
    assert_eq!(palette.color_of(Cell::Spot), palette.spot);
}

#[test]
fn buffer_dimensions_follow_size_times_scale() {
    let mut engine = XorshiftLanes::from_seed("dims");
    let grid = IconGrid::synthesize(&mut engine, 7);
    let icon = composite_grid(&grid, 24, &test_palette());
    assert_eq!(icon.width, 168);
    assert_eq!(icon.height, 168);
    assert_eq!(icon.data.len(), 168 * 168 * 4);
}

#[test]
fn every_pixel_is_fully_opaque() {
    let mut engine = XorshiftLanes::from_seed("alpha");
    let grid = IconGrid::synthesize(&mut engine, 5);
    let icon = composite_grid(&grid, 3, &test_palette());
    for px in icon.data.chunks_exact(4) {
        assert_eq!(px[3], 255);
    }
}

#[test]
fn each_block_is_a_single_palette_color() {
    let palette = test_palette();
    let mut engine = XorshiftLanes::from_seed("blocks");
    let grid = IconGrid::synthesize(&mut engine, 4);
    let scale = 5u32;
    let icon = composite_grid(&grid, scale, &palette);

    let side = grid.size() * scale;
    for y in 0..side {
        for x in 0..side {
            let expected = palette.color_of(grid.get(y / scale, x / scale));
            let at = ((y * side + x) * 4) as usize;
            assert_eq!(
                &icon.data[at..at + 4],
                [expected.r, expected.g, expected.b, 255],
                "pixel ({x}, {y})"
            );
        }
    }
}

#[test]
fn single_cell_at_unit_scale_is_one_pixel() {
    // All-zero engine draws 0.0, so the lone cell is background.
    let mut engine = XorshiftLanes::new();
    let grid = IconGrid::synthesize(&mut engine, 1);
    let icon = composite_grid(&grid, 1, &test_palette());
    assert_eq!(icon.width, 1);
    assert_eq!(icon.height, 1);
    assert_eq!(icon.data, vec![255, 255, 255, 255]);
}
