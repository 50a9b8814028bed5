use anyhow::{Result, bail};
use cgmath::{InnerSpace, Quaternion, Vector3};
use navpuck_view::{
    ModalResult, NavigationKind, Navigator, PointerEvent, Projection, Region, RegionView,
    ViewportContext,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Clone, Debug, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub view: ViewSpec,
    pub region: Option<[f32; 2]>,
    pub steps: Vec<Step>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ViewSpec {
    pub location: [f64; 3],
    /// `[w, x, y, z]`
    pub rotation: Option<[f64; 4]>,
    pub distance: f64,
    pub ortho_scale: Option<f64>,
}

impl Default for ViewSpec {
    fn default() -> Self {
        let view = RegionView::default();
        Self {
            location: view.view_location.into(),
            rotation: None,
            distance: view.view_distance,
            ortho_scale: None,
        }
    }
}

impl ViewSpec {
    fn to_region_view(&self) -> Result<RegionView> {
        let mut view = RegionView {
            view_location: Vector3::from(self.location),
            view_distance: self.distance,
            ..RegionView::default()
        };
        if let Some(rotation) = self.rotation {
            view.view_rotation = parse_rotation(rotation)?;
        }
        if let Some(scale) = self.ortho_scale {
            view.projection = Projection::Orthographic { scale };
        }
        Ok(view)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    OpenWidget { event: PointerEvent },
    StartGesture { kind: NavigationKind, event: PointerEvent },
    Event { event: PointerEvent },
    Cancel,
}

#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub location: [f64; 3],
    pub rotation: [f64; 4],
    pub distance: f64,
    pub ortho_scale: Option<f64>,
    pub roll_deg: f64,
    pub results: Vec<Option<ModalResult>>,
}

impl Report {
    fn new(view: &RegionView, results: Vec<Option<ModalResult>>) -> Self {
        let q = view.view_rotation;
        let ortho_scale = match view.projection {
            Projection::Perspective => None,
            Projection::Orthographic { scale } => Some(scale),
        };
        Self {
            location: view.view_location.into(),
            rotation: [q.s, q.v.x, q.v.y, q.v.z],
            distance: view.view_distance,
            ortho_scale,
            roll_deg: view.roll_angle().to_degrees(),
            results,
        }
    }
}

pub fn parse_rotation(values: [f64; 4]) -> Result<Quaternion<f64>> {
    let q = Quaternion::new(values[0], values[1], values[2], values[3]);
    if q.magnitude2() < 1.0e-12 {
        bail!("rotation quaternion must be non-zero");
    }
    Ok(q.normalize())
}

pub fn run(script: &Script, navigator: &mut Navigator, default_region: Region) -> Result<Report> {
    let view = script.view.to_region_view()?;
    let region = script
        .region
        .map(|[width, height]| Region::new(width, height))
        .unwrap_or(default_region);
    let mut ctx = ViewportContext::new(view, region);

    let mut results = Vec::with_capacity(script.steps.len());
    for (idx, step) in script.steps.iter().enumerate() {
        let result = match step {
            Step::OpenWidget { event } => Some(navigator.open_widget(&mut ctx, event)),
            Step::StartGesture { kind, event } => {
                Some(navigator.start_gesture(*kind, &mut ctx, event))
            }
            Step::Event { event } => Some(navigator.handle_event(&mut ctx, event)),
            Step::Cancel => {
                navigator.cancel(&mut ctx);
                None
            }
        };
        debug!(step = idx, ?result, "step replayed");
        results.push(result);
    }

    if !navigator.is_idle() {
        info!("script ended with an operator still running");
    }
    Ok(Report::new(&ctx.view, results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use navpuck_view::PuckConfig;

    const PAN_SCRIPT: &str = r#"{
        "region": [1000, 800],
        "view": { "rotation": [1, 0, 0, 0], "distance": 10 },
        "steps": [
            { "op": "start_gesture", "kind": "pan",
              "event": { "kind": "primary_button", "action": "press", "pos": { "x": 500, "y": 400 } } },
            { "op": "event",
              "event": { "kind": "pointer_move", "action": "move", "pos": { "x": 400, "y": 400 } } },
            { "op": "event",
              "event": { "kind": "primary_button", "action": "release", "pos": { "x": 400, "y": 400 } } }
        ]
    }"#;

    #[test]
    fn replays_pan_script() -> Result<()> {
        let script: Script = serde_json::from_str(PAN_SCRIPT)?;
        let mut navigator = Navigator::new(&PuckConfig::default())?;
        let report = run(&script, &mut navigator, Region::new(640.0, 480.0))?;

        // 100 px left at distance 10 over a 1000 px region moves the focus +1 along X.
        assert!((report.location[0] - 1.0).abs() < 1.0e-9);
        assert!(report.location[1].abs() < 1.0e-9);
        assert_eq!(
            report.results,
            vec![
                Some(ModalResult::Running),
                Some(ModalResult::Running),
                Some(ModalResult::Finished),
            ]
        );
        assert!(navigator.is_idle());
        Ok(())
    }

    #[test]
    fn zero_rotation_is_rejected() {
        assert!(parse_rotation([0.0, 0.0, 0.0, 0.0]).is_err());
    }
}
