// Pointer event adapter - raw surface events become hover transitions
use crate::application::hover::HoverController;
use crate::application::surface::RenderSurface;

/// A pointer sample from the rendering surface, in plot coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Moved { x: f64, y: f64 },
    Left,
}

/// Translates one boundary event into a controller transition. The
/// controller owns all hover state; this adapter stays stateless.
pub fn dispatch(
    controller: &mut HoverController,
    surface: &mut dyn RenderSurface,
    event: PointerEvent,
) {
    match event {
        PointerEvent::Moved { x, y } => controller.pointer_at(surface, x, y),
        PointerEvent::Left => controller.pointer_left(surface),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::post_repository::PostRepository;
    use crate::application::scatter::ScatterService;
    use crate::domain::error::ChartError;
    use crate::domain::record::{Metric, PostRecord};
    use crate::infrastructure::config::{ChartConfig, DataConfig, Dimensions};
    use crate::presentation::svg::SvgSurface;
    use chrono::NaiveDate;
    use std::sync::Arc;

    struct StubRepository;

    impl PostRepository for StubRepository {
        fn load(&self) -> Result<Vec<PostRecord>, ChartError> {
            Ok(vec![
                PostRecord::new(
                    NaiveDate::from_ymd_opt(2020, 3, 1).unwrap(),
                    0.5,
                    1.0,
                    0.9,
                    "Support".to_string(),
                    "hovered post".to_string(),
                    "body".to_string(),
                    String::new(),
                ),
                PostRecord::new(
                    NaiveDate::from_ymd_opt(2020, 4, 1).unwrap(),
                    -0.3,
                    2.0,
                    0.8,
                    "News".to_string(),
                    "other post".to_string(),
                    "body".to_string(),
                    String::new(),
                ),
            ])
        }
    }

    fn controller() -> HoverController {
        let config = ChartConfig {
            data: DataConfig {
                csv_path: "unused.csv".to_string(),
                metric: None,
            },
            dimensions: Dimensions::default(),
            palette: Vec::new(),
            default_color: None,
        };
        let service = ScatterService::new(Arc::new(StubRepository), config);
        HoverController::new(service.build(Metric::CalculatedSentiment).unwrap())
    }

    #[test]
    fn test_moved_event_shows_tooltip_on_the_surface() {
        let mut ctl = controller();
        let mut surface = SvgSurface::new(Dimensions::default());
        let p = ctl.chart().points[0];

        dispatch(&mut ctl, &mut surface, PointerEvent::Moved { x: p.x, y: p.y });

        assert_eq!(ctl.active_record().unwrap().title, "hovered post");
        assert!(surface.document().contains("March 1, 2020"));
    }

    #[test]
    fn test_left_event_clears_the_tooltip() {
        let mut ctl = controller();
        let mut surface = SvgSurface::new(Dimensions::default());
        let p = ctl.chart().points[0];

        dispatch(&mut ctl, &mut surface, PointerEvent::Moved { x: p.x, y: p.y });
        dispatch(&mut ctl, &mut surface, PointerEvent::Left);

        assert!(ctl.active_record().is_none());
        assert!(!surface.document().contains("March 1, 2020"));
    }
}
