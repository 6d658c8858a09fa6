//! Plays `site_core` timelines against real elements.
//!
//! Each [`TargetId`] maps to one or more elements. After every step the
//! dirty targets are re-rendered from the stage into inline styles.

use site_core::{Player, Prop, Stage, TargetId, Timeline};
use web_sys as web;

pub type Callback = Box<dyn FnOnce()>;

#[derive(Default)]
pub struct Animator {
    pub stage: Stage,
    elements: Vec<Vec<web::HtmlElement>>,
    player: Player<Callback>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, elements: Vec<web::HtmlElement>) -> TargetId {
        let id = TargetId(self.elements.len() as u32);
        self.elements.push(elements);
        id
    }

    pub fn register_each(&mut self, elements: Vec<web::HtmlElement>) -> Vec<TargetId> {
        elements.into_iter().map(|el| self.register(vec![el])).collect()
    }

    pub fn elements(&self, id: TargetId) -> &[web::HtmlElement] {
        self.elements
            .get(id.0 as usize)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Instant set, rendered on the next frame.
    pub fn set(&mut self, targets: &[TargetId], props: &[(Prop, f64)]) {
        self.stage.set_many(targets, props);
    }

    /// Newer timelines take over the properties they share with older ones.
    pub fn play(&mut self, timeline: Timeline<Callback>, on_complete: Option<Callback>) {
        self.player.play(timeline, on_complete);
    }

    /// Step every running timeline and render. Cues and completion callbacks
    /// are returned in firing order so the caller can run them unborrowed.
    pub fn tick(&mut self, dt: f64) -> Vec<Callback> {
        let fired = self.player.advance(dt, &mut self.stage);
        self.render();
        fired
    }

    pub fn render(&mut self) {
        for id in self.stage.take_dirty() {
            let style = StyleParts::from_stage(&self.stage, id);
            for el in self.elements(id) {
                style.apply(el);
            }
        }
    }
}

/// Inline style derived from a target's stage values.
struct StyleParts {
    transform: Option<String>,
    opacity: Option<f64>,
    clip: Option<String>,
}

impl StyleParts {
    fn from_stage(stage: &Stage, id: TargetId) -> Self {
        let get = |p: Prop| stage.try_get(id, p);
        let mut parts: Vec<String> = Vec::new();
        if get(Prop::X).is_some() || get(Prop::Y).is_some() {
            parts.push(format!(
                "translate({:.3}px, {:.3}px)",
                stage.get(id, Prop::X),
                stage.get(id, Prop::Y)
            ));
        }
        if get(Prop::XPercent).is_some() || get(Prop::YPercent).is_some() {
            parts.push(format!(
                "translate({:.3}%, {:.3}%)",
                stage.get(id, Prop::XPercent),
                stage.get(id, Prop::YPercent)
            ));
        }
        if let Some(vh) = get(Prop::YVh) {
            parts.push(format!("translateY({:.3}vh)", vh));
        }
        if let Some(s) = get(Prop::Scale) {
            parts.push(format!("scale({:.4})", s));
        }
        if let Some(sx) = get(Prop::ScaleX) {
            parts.push(format!("scaleX({:.4})", sx));
        }
        let clip = if get(Prop::ClipTop).is_some() || get(Prop::ClipBottom).is_some() {
            let top = stage.get(id, Prop::ClipTop);
            let bottom = stage.get(id, Prop::ClipBottom);
            Some(format!(
                "polygon(0% {t:.3}%, 100% {t:.3}%, 100% {b:.3}%, 0% {b:.3}%)",
                t = top,
                b = bottom
            ))
        } else {
            None
        };
        Self {
            transform: (!parts.is_empty()).then(|| parts.join(" ")),
            opacity: get(Prop::Opacity),
            clip,
        }
    }

    fn apply(&self, el: &web::HtmlElement) {
        let style = el.style();
        if let Some(t) = &self.transform {
            _ = style.set_property("transform", t);
        }
        if let Some(o) = self.opacity {
            _ = style.set_property("opacity", &format!("{:.4}", o));
        }
        if let Some(c) = &self.clip {
            _ = style.set_property("clip-path", c);
        }
    }
}
