//! Tests for canvas style state handling

#[cfg(test)]
mod tests {
    use noisemosaic::canvas::{Canvas, DrawStyle, RecordingCanvas};

    // Tests the default style fills white with a thin black outline
    // Verified by defaulting to no fill
    #[test]
    fn test_default_style() {
        let style = DrawStyle::default();
        assert_eq!(style.fill, Some([255, 255, 255, 255]));
        assert_eq!(style.stroke, Some([0, 0, 0, 255]));
        assert!((style.stroke_weight - 1.0).abs() < f64::EPSILON);
    }

    // Tests the provided style setters update the shared style
    // Verified by making no_fill clear the stroke
    #[test]
    fn test_style_setters() {
        let mut canvas = RecordingCanvas::new(1, 1);

        canvas.fill([1, 1, 1, 1]);
        canvas.stroke([2, 2, 2, 2]);
        canvas.stroke_weight(4.5);
        assert_eq!(
            *canvas.style_mut(),
            DrawStyle {
                fill: Some([1, 1, 1, 1]),
                stroke: Some([2, 2, 2, 2]),
                stroke_weight: 4.5,
            }
        );

        canvas.no_fill();
        assert_eq!(canvas.style_mut().fill, None);
        assert_eq!(canvas.style_mut().stroke, Some([2, 2, 2, 2]));

        canvas.no_stroke();
        assert_eq!(canvas.style_mut().stroke, None);
    }
}
