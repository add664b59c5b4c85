use serde::Deserialize;

/// One displayable unit: an asset reference and the text describing it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SlideDescriptor {
    /// Opaque asset identifier, resolved against the asset root by the view.
    pub source: String,
    /// Alternative text, also drawn as the caption.
    pub label: String,
}

impl SlideDescriptor {
    pub fn new(source: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            label: label.into(),
        }
    }
}

const CHART_SLIDES: [(&str, &str); 8] = [
    ("public/charts/im1.png", "Code Editor"),
    ("public/charts/im2.png", "Settings"),
    ("public/charts/im3.png", "Code"),
    ("public/charts/im4.png", "Advanced Results"),
    ("public/charts/im5.png", "Advanced Results"),
    ("public/charts/im6.png", "Advanced Results"),
    ("public/charts/im7.png", "Generate Prompt"),
    ("public/charts/im8.png", "submissions"),
];

/// The built-in "Analytics Snapshots" sequence, in display order.
pub fn chart_slides() -> Vec<SlideDescriptor> {
    CHART_SLIDES
        .iter()
        .map(|(source, label)| SlideDescriptor::new(*source, *label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_slides_keep_display_order() {
        let slides = chart_slides();
        assert_eq!(slides.len(), 8);
        assert_eq!(slides[0], SlideDescriptor::new("public/charts/im1.png", "Code Editor"));
        assert_eq!(slides[7], SlideDescriptor::new("public/charts/im8.png", "submissions"));
        for (i, slide) in slides.iter().enumerate() {
            assert_eq!(slide.source, format!("public/charts/im{}.png", i + 1));
        }
    }

    #[test]
    fn chart_slides_allow_repeated_labels() {
        let repeated = chart_slides()
            .iter()
            .filter(|s| s.label == "Advanced Results")
            .count();
        assert_eq!(repeated, 3);
    }
}
