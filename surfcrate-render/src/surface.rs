//! Rendering surfaces the engine binds its draw commands to

use std::fmt::Write;
use std::rc::Rc;

use surfcrate_core::SurfaceId;

use crate::frame::{Frame, Overlay, Transition};
use crate::quad::fixed;

/// A scene-graph node that holds a grid datum and a keyed set of primitives.
///
/// The engine reads the datum at the start of every render and binds the
/// resulting [`Frame`] in one call. Implementations own their primitives;
/// nothing else mutates them.
pub trait RenderSurface<T> {
    /// Stable identity of the node
    fn id(&self) -> SurfaceId;

    /// The grid currently bound to the node, if any
    fn datum(&self) -> Option<Rc<Vec<Vec<T>>>>;

    /// Transition currently running on the node, if any
    fn current_transition(&self) -> Option<Transition>;

    /// Enter, update and exit primitives so they match `frame`
    fn bind(&mut self, frame: &Frame);
}

/// A bound `<path>` element
#[derive(Debug, Clone, PartialEq)]
pub struct PathElement {
    pub d: String,
    pub fill: Option<String>,
    /// Transition the last update was applied with
    pub transition: Option<Transition>,
}

/// Element counts touched by the last bind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BindReport {
    pub entered: usize,
    pub updated: usize,
    pub exited: usize,
}

/// In-memory SVG scene graph
#[derive(Debug)]
pub struct SvgScene<T> {
    id: SurfaceId,
    datum: Option<Rc<Vec<Vec<T>>>>,
    width: f64,
    height: f64,
    precision: usize,
    paths: Vec<PathElement>,
    overlays: Vec<Overlay>,
    transition: Option<Transition>,
    binds: usize,
    last_bind: BindReport,
}

impl<T> SvgScene<T> {
    /// Create an empty scene of the given size
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            id: SurfaceId::next(),
            datum: None,
            width,
            height,
            precision: 10,
            paths: Vec::new(),
            overlays: Vec::new(),
            transition: None,
            binds: 0,
            last_bind: BindReport::default(),
        }
    }

    /// Create a scene bound to `rows`
    pub fn with_datum(width: f64, height: f64, rows: Vec<Vec<T>>) -> Self {
        let mut scene = Self::new(width, height);
        scene.set_datum(rows);
        scene
    }

    /// Replace the bound grid
    pub fn set_datum(&mut self, rows: Vec<Vec<T>>) {
        self.datum = Some(Rc::new(rows));
    }

    /// Set the transition reported as running on the node
    pub fn set_transition(&mut self, transition: Option<Transition>) {
        self.transition = transition;
    }

    /// Decimal places used for overlay coordinates in [`SvgScene::to_svg`]
    pub fn set_precision(&mut self, precision: usize) {
        self.precision = precision;
    }

    pub fn paths(&self) -> &[PathElement] {
        &self.paths
    }

    pub fn overlays(&self) -> &[Overlay] {
        &self.overlays
    }

    /// Number of binds performed so far
    pub fn bind_count(&self) -> usize {
        self.binds
    }

    pub fn last_bind(&self) -> BindReport {
        self.last_bind
    }

    /// Serialise the bound primitives into a standalone SVG document
    pub fn to_svg(&self) -> String {
        let p = self.precision;
        let mut svg = String::with_capacity(self.paths.len() * (8 * p + 64) + 256);
        let _ = writeln!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">",
            self.width, self.height, self.width, self.height
        );
        let _ = writeln!(svg, "<g>");
        for path in &self.paths {
            match &path.fill {
                Some(fill) => {
                    let _ = writeln!(svg, "<path d=\"{}\" fill=\"{}\"/>", path.d, fill);
                }
                None => {
                    let _ = writeln!(svg, "<path d=\"{}\"/>", path.d);
                }
            }
        }
        for overlay in &self.overlays {
            match overlay {
                Overlay::Line { x1, y1, x2, y2, style } => {
                    let _ = writeln!(
                        svg,
                        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" style=\"{}\"/>",
                        fixed(*x1, p),
                        fixed(*y1, p),
                        fixed(*x2, p),
                        fixed(*y2, p),
                        style
                    );
                }
                Overlay::Circle { cx, cy, r } => {
                    let _ = writeln!(
                        svg,
                        "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"/>",
                        fixed(*cx, p),
                        fixed(*cy, p),
                        r
                    );
                }
            }
        }
        svg.push_str("</g>\n</svg>\n");
        svg
    }
}

impl<T> RenderSurface<T> for SvgScene<T> {
    fn id(&self) -> SurfaceId {
        self.id
    }

    fn datum(&self) -> Option<Rc<Vec<Vec<T>>>> {
        self.datum.clone()
    }

    fn current_transition(&self) -> Option<Transition> {
        self.transition
    }

    fn bind(&mut self, frame: &Frame) {
        let incoming = frame.paths.len();
        let existing = self.paths.len();

        // exit
        let exited = existing.saturating_sub(incoming);
        self.paths.truncate(incoming);

        // update
        for (element, command) in self.paths.iter_mut().zip(&frame.paths) {
            element.d.clone_from(&command.d);
            if let Some(fill) = &command.fill {
                element.fill = Some(fill.clone());
            }
            element.transition = frame.transition;
        }

        // enter
        for command in &frame.paths[self.paths.len()..] {
            self.paths.push(PathElement {
                d: command.d.clone(),
                fill: command.fill.clone(),
                transition: frame.transition,
            });
        }

        self.overlays.clone_from(&frame.overlays);
        self.binds += 1;
        self.last_bind = BindReport {
            entered: incoming.saturating_sub(existing),
            updated: incoming.min(existing),
            exited,
        };
        log::trace!("{} bound: {:?}", self.id, self.last_bind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::PathCommand;

    fn frame(fills: &[Option<&str>]) -> Frame {
        Frame {
            paths: fills
                .iter()
                .enumerate()
                .map(|(i, fill)| PathCommand {
                    d: format!("M{},0L1,0L1,1L0,1Z", i),
                    fill: fill.map(str::to_string),
                    depth: -(i as f64),
                    cell: (0, i),
                })
                .collect(),
            ..Frame::default()
        }
    }

    #[test]
    fn test_enter_update_exit() {
        let mut scene: SvgScene<f64> = SvgScene::new(100.0, 100.0);

        scene.bind(&frame(&[Some("red"), Some("blue")]));
        assert_eq!(scene.last_bind(), BindReport { entered: 2, updated: 0, exited: 0 });

        scene.bind(&frame(&[Some("green"), None, Some("black")]));
        assert_eq!(scene.last_bind(), BindReport { entered: 1, updated: 2, exited: 0 });
        assert_eq!(scene.paths().len(), 3);

        scene.bind(&frame(&[None]));
        assert_eq!(scene.last_bind(), BindReport { entered: 0, updated: 1, exited: 2 });
        assert_eq!(scene.paths().len(), 1);
        assert_eq!(scene.bind_count(), 3);
    }

    #[test]
    fn test_missing_fill_leaves_element_fill() {
        let mut scene: SvgScene<f64> = SvgScene::new(100.0, 100.0);
        scene.bind(&frame(&[Some("red")]));
        scene.bind(&frame(&[None]));
        assert_eq!(scene.paths()[0].fill.as_deref(), Some("red"));

        scene.bind(&frame(&[None, None]));
        assert_eq!(scene.paths()[1].fill, None);
    }

    #[test]
    fn test_transition_is_recorded_on_updates() {
        let mut scene: SvgScene<f64> = SvgScene::new(100.0, 100.0);
        let mut animated = frame(&[None]);
        animated.transition = Some(Transition::new(10, 500));
        scene.bind(&animated);
        assert_eq!(scene.paths()[0].transition, Some(Transition::new(10, 500)));

        scene.bind(&frame(&[None]));
        assert_eq!(scene.paths()[0].transition, None);
    }

    #[test]
    fn test_to_svg() {
        let mut scene: SvgScene<f64> = SvgScene::new(100.0, 80.0);
        scene.set_precision(1);
        let mut f = frame(&[Some("rgb(1,2,3)"), None]);
        f.overlays.push(Overlay::Circle { cx: 1.24, cy: 2.0, r: 3.0 });
        scene.bind(&f);

        let svg = scene.to_svg();
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"100\" height=\"80\""));
        assert!(svg.contains("<path d=\"M0,0L1,0L1,1L0,1Z\" fill=\"rgb(1,2,3)\"/>"));
        assert!(svg.contains("<path d=\"M1,0L1,0L1,1L0,1Z\"/>"));
        assert!(svg.contains("<circle cx=\"1.2\" cy=\"2.0\" r=\"3\"/>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
