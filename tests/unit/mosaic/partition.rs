//! Tests for seam-free grid partitioning, center sampling and block creation

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use noisemosaic::io::image::SourceImage;
    use noisemosaic::mosaic::partition::{
        Block, BlockGeometry, grid_cells, make_block, partition_image,
    };

    // Pixel (x, y) holds (x, y, 0, 255) so samples reveal their coordinates
    fn coordinate_image(width: u32, height: u32) -> SourceImage {
        let pixels = RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, 0, 255])
        });
        SourceImage::from_rgba(pixels).expect("valid image")
    }

    fn flat_noise(_x: f64, _y: f64) -> f64 {
        0.5
    }

    // Counts how many cells cover each pixel
    fn coverage(cells: &[BlockGeometry], width: u32, height: u32) -> Vec<u32> {
        let mut counts = vec![0u32; (width * height) as usize];
        for cell in cells {
            for y in cell.y..cell.y + cell.height {
                for x in cell.x..cell.x + cell.width {
                    let index = (y * width + x) as usize;
                    if let Some(count) = counts.get_mut(index) {
                        *count += 1;
                    }
                }
            }
        }
        counts
    }

    fn assert_exact_tiling(width: u32, height: u32, segments: u32) {
        let cells = grid_cells(width, height, segments).expect("cells");
        let area: u64 = cells.iter().map(BlockGeometry::area).sum();
        assert_eq!(
            area,
            u64::from(width) * u64::from(height),
            "{width}x{height} with {segments} segments: block areas must sum to image area"
        );
        assert!(
            cells
                .iter()
                .all(|c| c.x + c.width <= width && c.y + c.height <= height),
            "{width}x{height} with {segments} segments: blocks must stay inside the image"
        );
        assert!(
            coverage(&cells, width, height).iter().all(|&c| c == 1),
            "{width}x{height} with {segments} segments: every pixel covered exactly once"
        );
    }

    // Tests the even-grid scenario from a 128x128 image
    // Verified by rounding widths instead of edges
    #[test]
    fn test_even_grid_produces_uniform_two_pixel_blocks() {
        let image = coordinate_image(128, 128);
        let blocks = partition_image(&image, 64, &flat_noise).expect("partition");

        assert_eq!(blocks.len(), 4096);
        assert!(
            blocks
                .iter()
                .all(|b| b.geometry.width == 2 && b.geometry.height == 2)
        );

        let first = blocks.first().expect("first block");
        assert_eq!(
            first.geometry,
            BlockGeometry {
                x: 0,
                y: 0,
                width: 2,
                height: 2
            }
        );
        assert_eq!(first.base_color, [1, 1, 0, 255], "samples pixel (1, 1)");
    }

    // Tests uneven division still tiles exactly with mixed block sizes
    // Verified by rounding the accumulated size instead of each boundary
    #[test]
    fn test_uneven_grid_mixes_block_sizes_without_gaps() {
        let cells = grid_cells(130, 130, 64).expect("cells");

        assert_eq!(cells.len(), 4096);
        assert!(cells.iter().all(|c| (1..=3).contains(&c.width)));
        assert!(cells.iter().any(|c| c.width == 2));
        assert!(cells.iter().any(|c| c.width != 2));
        assert!(cells.iter().any(|c| c.height != 2));

        assert_exact_tiling(130, 130, 64);
    }

    // Tests tiling over a spread of sizes and segment counts
    // Verified by removing the edge clamp
    #[test]
    fn test_tiling_is_exact_for_many_dimensions() {
        for &(width, height) in &[(64, 64), (65, 97), (200, 113), (301, 64), (1000, 999)] {
            for &segments in &[1, 3, 7, 10, 64] {
                assert_exact_tiling(width, height, segments);
            }
        }
    }

    // Tests segment counts larger than the image collapse cells instead of overlapping
    // Verified by keeping zero-width cells
    #[test]
    fn test_more_segments_than_pixels_drops_degenerate_cells() {
        let cells = grid_cells(5, 5, 8).expect("cells");
        assert!(cells.len() < 64);
        assert!(cells.iter().all(|c| c.width > 0 && c.height > 0));
        assert_exact_tiling(5, 5, 8);
    }

    // Tests row-major ordering of the produced cells
    // Verified by swapping loop nesting
    #[test]
    fn test_cells_are_row_major() {
        let cells = grid_cells(6, 6, 3).expect("cells");
        let origins: Vec<(u32, u32)> = cells.iter().map(|c| (c.x, c.y)).collect();
        assert_eq!(
            origins,
            vec![
                (0, 0),
                (2, 0),
                (4, 0),
                (0, 2),
                (2, 2),
                (4, 2),
                (0, 4),
                (2, 4),
                (4, 4)
            ]
        );
    }

    // Tests zero segments is rejected
    // Verified by removing the guard
    #[test]
    fn test_zero_segments_is_an_error() {
        assert!(grid_cells(10, 10, 0).is_err());
        let image = coordinate_image(4, 4);
        assert!(partition_image(&image, 0, &flat_noise).is_err());
    }

    // Tests partitioning is reproducible
    // Verified by injecting randomness into sampling
    #[test]
    fn test_partition_is_deterministic() {
        let image = coordinate_image(130, 97);
        let first = partition_image(&image, 64, &flat_noise).expect("partition");
        let second = partition_image(&image, 64, &flat_noise).expect("partition");
        assert_eq!(first, second);
    }

    // Tests every center sample lies inside the image and inside its block
    // Verified by removing the clamp
    #[test]
    fn test_center_samples_stay_in_bounds() {
        for &(width, height) in &[(130, 130), (1, 1), (3, 200), (64, 65)] {
            for cell in grid_cells(width, height, 64).expect("cells") {
                let (sx, sy) = cell.center_sample(width, height);
                assert!(sx < width && sy < height);
                assert!(sx >= cell.x && sx < cell.x + cell.width);
                assert!(sy >= cell.y && sy < cell.y + cell.height);
            }
        }
    }

    // Tests a single-pixel image yields one block sampling that pixel
    // Verified by sampling past the image edge
    #[test]
    fn test_single_pixel_image() {
        let image = SourceImage::from_rgba(RgbaImage::from_pixel(1, 1, Rgba([9, 8, 7, 6])))
            .expect("image");
        let blocks = partition_image(&image, 64, &flat_noise).expect("partition");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks.first().map(|b| b.base_color), Some([9, 8, 7, 6]));
    }

    // Tests the target color blends 60% toward the noise color
    // Verified by swapping blend direction
    #[test]
    fn test_make_block_blends_target_toward_noise() {
        let geometry = BlockGeometry {
            x: 0,
            y: 0,
            width: 2,
            height: 2,
        };
        let block = make_block(geometry, [100, 200, 0, 255], &flat_noise, (128, 128));

        let expected = [116.5, 156.5, 76.5];
        for (actual, expected) in block.target_color.iter().zip(expected) {
            assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
        }
        assert_eq!(block.base_color, [100, 200, 0, 255]);
    }

    // Tests green and blue read the noise field at offset inputs
    // Verified by dropping the channel offsets
    #[test]
    fn test_make_block_decorrelates_channels_with_offsets() {
        let banded = |x: f64, _y: f64| {
            if x >= 100.0 {
                0.9
            } else if x >= 50.0 {
                0.5
            } else {
                0.1
            }
        };
        let geometry = BlockGeometry {
            x: 0,
            y: 0,
            width: 4,
            height: 4,
        };
        let block = make_block(geometry, [0, 0, 0, 255], &banded, (64, 64));

        let expected = [0.6 * 0.1 * 255.0, 0.6 * 0.5 * 255.0, 0.6 * 0.9 * 255.0];
        for (actual, expected) in block.target_color.iter().zip(expected) {
            assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
        }
    }

    // Tests noise inputs use the normalized, scaled block origin
    // Verified by skipping normalization
    #[test]
    fn test_make_block_samples_scaled_normalized_origin() {
        let echo_x = |x: f64, _y: f64| x / 3.0;
        let geometry = BlockGeometry {
            x: 32,
            y: 0,
            width: 2,
            height: 2,
        };
        let block: Block = make_block(geometry, [0, 0, 0, 255], &echo_x, (64, 64));

        // x = 32 / 64 * 3.0 = 1.5, echoed back as 0.5
        let expected_red = 0.6 * 0.5 * 255.0;
        assert!((block.target_color[0] - expected_red).abs() < 1e-9);
        let (nx, ny) = block.normalized_position((64, 64));
        assert!((nx - 0.5).abs() < f64::EPSILON && ny.abs() < f64::EPSILON);
    }
}
