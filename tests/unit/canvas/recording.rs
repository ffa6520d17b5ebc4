//! Tests for draw-call recording

#[cfg(test)]
mod tests {
    use noisemosaic::canvas::{Canvas, DrawCommand, DrawStyle, RecordingCanvas};

    // Tests commands are logged in call order with the style active at the time
    // Verified by recording the style at the end of the frame
    #[test]
    fn test_records_commands_with_style_snapshot() {
        let mut canvas = RecordingCanvas::new(20, 10);
        canvas.background(255);
        canvas.fill([1, 2, 3, 4]);
        canvas.no_stroke();
        canvas.rect(0.0, 0.0, 5.0, 5.0);
        canvas.no_fill();
        canvas.stroke([9, 9, 9, 200]);
        canvas.stroke_weight(30.0);
        canvas.point(1.0, 2.0);
        canvas.line(1.0, 2.0, 3.0, 4.0);

        let painted = DrawStyle {
            fill: Some([1, 2, 3, 4]),
            stroke: None,
            stroke_weight: 1.0,
        };
        let trail = DrawStyle {
            fill: None,
            stroke: Some([9, 9, 9, 200]),
            stroke_weight: 30.0,
        };

        assert_eq!(
            canvas.commands(),
            &[
                DrawCommand::Background { gray: 255 },
                DrawCommand::Rect {
                    x: 0.0,
                    y: 0.0,
                    width: 5.0,
                    height: 5.0,
                    style: painted,
                },
                DrawCommand::Point {
                    at: [1.0, 2.0],
                    style: trail,
                },
                DrawCommand::Line {
                    from: [1.0, 2.0],
                    to: [3.0, 4.0],
                    style: trail,
                },
            ]
        );
        assert_eq!(canvas.rects().count(), 1);
        assert_eq!((canvas.width(), canvas.height()), (20, 10));
    }

    // Tests clearing drops commands but keeps style
    // Verified by resetting style on clear
    #[test]
    fn test_clear_keeps_style() {
        let mut canvas = RecordingCanvas::new(5, 5);
        canvas.fill([7, 7, 7, 7]);
        canvas.rect(0.0, 0.0, 1.0, 1.0);
        canvas.clear();
        assert!(canvas.commands().is_empty());

        canvas.rect(0.0, 0.0, 1.0, 1.0);
        match canvas.commands().first() {
            Some(DrawCommand::Rect { style, .. }) => assert_eq!(style.fill, Some([7, 7, 7, 7])),
            other => unreachable!("Expected a rect, got {other:?}"),
        }
    }
}
