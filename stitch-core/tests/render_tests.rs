#[cfg(test)]
mod tests {
    use stitch_core::families::{horizontal, ne_diagonal, nw_diagonal, vertical};
    use stitch_core::{
        background, layers, render, Family, Grid, PatternList, Point, RecordingPen, RenderConfig,
        Segment,
    };

    fn origin_grid(cols: i64, rows: i64, cell: f64) -> Grid {
        Grid::new(cols, rows, cell, Point::default())
    }

    fn coords(segments: &[Segment]) -> Vec<(f64, f64, f64, f64)> {
        segments.iter().map(|s| s.coords()).collect()
    }

    #[test]
    fn test_background_grid_counts() {
        let grid = origin_grid(4, 3, 10.0);
        let segments = background(&grid);
        assert_eq!(segments.len(), (4 + 1) + (3 + 1));
        let (_, y1, _, y2) = segments[0].coords();
        assert_eq!(y1, 0.0);
        assert_eq!(y2, 30.0);
    }

    #[test]
    fn test_horizontal_positions() {
        let grid = origin_grid(4, 1, 10.0);
        let segments = horizontal(&grid, &PatternList::parse(["0", "0011"]));
        assert_eq!(
            coords(&segments),
            vec![(20.0, 10.0, 30.0, 10.0), (30.0, 10.0, 40.0, 10.0)]
        );
    }

    #[test]
    fn test_vertical_positions() {
        let grid = origin_grid(1, 4, 10.0);
        let segments = vertical(&grid, &PatternList::parse(["0", "0011"]));
        assert_eq!(
            coords(&segments),
            vec![(10.0, 20.0, 10.0, 30.0), (10.0, 30.0, 10.0, 40.0)]
        );
    }

    #[test]
    fn test_diagonals_cover_every_cell_once() {
        let grid = origin_grid(5, 3, 2.0);
        let on = PatternList::parse(["1"]);

        let mut ne: Vec<_> = ne_diagonal(&grid, &on)
            .iter()
            .map(|s| (s.start.x as i64, s.start.y as i64))
            .collect();
        ne.sort();
        let mut nw: Vec<_> = nw_diagonal(&grid, &on)
            .iter()
            .map(|s| (s.end.x as i64, s.start.y as i64))
            .collect();
        nw.sort();

        let mut cells = Vec::new();
        for col in 0..5 {
            for row in 0..3 {
                cells.push((col * 2, row * 2));
            }
        }
        cells.sort();
        assert_eq!(ne, cells);
        assert_eq!(nw, cells);
    }

    #[test]
    fn test_generators_are_repeatable() {
        let grid = origin_grid(7, 5, 3.0);
        let patterns = PatternList::parse(["0110", "1", "", "101"]);
        for family in Family::DRAW_ORDER {
            let first = family.generate(&grid, &patterns);
            let second = family.generate(&grid, &patterns);
            assert_eq!(first, second, "{} differs between runs", family);
        }
    }

    #[test]
    fn test_render_draws_layers_in_order() {
        let mut config = RenderConfig::default()
            .with_patterns(Family::NeDiagonal, PatternList::parse(["10"]))
            .with_patterns(Family::NwDiagonal, PatternList::parse(["01"]));
        config.background.enabled = true;

        let expected: Vec<Segment> = layers(&config)
            .into_iter()
            .flat_map(|layer| layer.segments)
            .collect();

        let mut pen = RecordingPen::new();
        let stats = render(&config, &mut pen);
        assert_eq!(pen.segments(), expected);
        assert_eq!(stats.total(), expected.len());
        assert_eq!(stats.layers[0], ("background", 31 + 31));
    }

    #[test]
    fn test_default_render_is_centered() {
        let mut pen = RecordingPen::new();
        render(&RenderConfig::default(), &mut pen);
        let segments = pen.segments();
        assert!(!segments.is_empty());
        for s in &segments {
            for p in [s.start, s.end] {
                assert!((-180.0..=180.0).contains(&p.x), "x out of grid: {}", s);
                assert!((-180.0..=180.0).contains(&p.y), "y out of grid: {}", s);
            }
        }
    }

    #[test]
    fn test_negative_dimensions_render_nothing() {
        let config = RenderConfig::blank(-4, -4, 10.0)
            .with_patterns(Family::Horizontal, PatternList::parse(["1"]))
            .with_patterns(Family::NeDiagonal, PatternList::parse(["1"]));
        let mut pen = RecordingPen::new();
        let stats = render(&config, &mut pen);
        assert_eq!(stats.total(), 0);
        assert!(pen.segments().is_empty());
    }
}
