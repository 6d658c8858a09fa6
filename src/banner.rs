//! Telescope hero: scroll progress through the pinned banner drives the
//! image scale, the intro text split, the header words and the CTA.

use crate::animator::Callback;
use crate::app::App;
use crate::constants::*;
use crate::dom;
use crate::rotator::Rotator;
use crate::split;
use site_core::constants::{PIN_SPAN_VIEWPORTS, SCRUB_LAG_SEC, TELESCOPE_SPAN_VIEWPORTS};
use site_core::scroll::{PinPhase, PinnedRange, Scrub};
use site_core::telescope::{banner_cta_visible, header_visible, TelescopeFrame, TelescopeMapper};
use site_core::{At, Ease, Prop, SiteError, TargetId, Timeline, Tween, Viewport};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Targets {
    container: TargetId,
    masks: Vec<TargetId>,
    intro: Vec<TargetId>,
    words: Vec<TargetId>,
    header: TargetId,
    cta: TargetId,
}

pub struct Banner {
    mapper: TelescopeMapper,
    targets: Targets,
    banner: web::HtmlElement,
    spacer: web::HtmlElement,
    start: f64,
    telescope_scrub: Scrub,
    pin_scrub: Scrub,
    phase: Option<PinPhase>,
    header_shown: Option<bool>,
    cta_shown: Option<bool>,
    last_frame: Option<TelescopeFrame>,
    rotator: Option<Rc<Rotator>>,
}

impl Banner {
    pub fn setup(app: &App, rotator: Option<Rc<Rotator>>) -> Result<Self, SiteError> {
        let doc = &app.document;
        let banner = dom::query_html(doc, SEL_BANNER).ok_or(SiteError::MissingElement(SEL_BANNER))?;
        let container = dom::query_html(doc, SEL_BANNER_CONTAINER)
            .ok_or(SiteError::MissingElement(SEL_BANNER_CONTAINER))?;

        let masks = dom::query_all_html(doc, SEL_BANNER_MASKS);
        let intro = dom::query_all_html(doc, SEL_BANNER_INTRO);
        let words: Vec<web::HtmlElement> = dom::query_all(doc, SEL_BANNER_WORDS)
            .iter()
            .flat_map(|h| split::split_words(doc, h))
            .collect();
        let mut header = dom::query_all_html(doc, SEL_BANNER_HEADER);
        header.extend(dom::query_all_html(doc, SEL_SERVICES_LIST));
        let mut cta = dom::query_all_html(doc, SEL_BANNER_ARROW);
        cta.extend(dom::query_all_html(doc, SEL_BANNER_FAVICON));

        let mapper = TelescopeMapper::new(masks.len(), words.len());
        let targets = Targets {
            container: app.register(vec![container]),
            masks: app.register_each(masks),
            intro: app.register_each(intro),
            words: app.register_each(words),
            header: app.register(header),
            cta: app.register(cta),
        };
        let spacer = wrap_in_spacer(doc, &banner)?;
        log::info!(
            "[banner] {} layers, {} words",
            targets.masks.len(),
            targets.words.len()
        );

        let mut this = Self {
            mapper,
            targets,
            banner,
            spacer,
            start: 0.0,
            telescope_scrub: Scrub::new(SCRUB_LAG_SEC),
            pin_scrub: Scrub::new(SCRUB_LAG_SEC),
            phase: None,
            header_shown: None,
            cta_shown: None,
            last_frame: None,
            rotator,
        };
        this.write_frame(app, this.mapper.initial_frame());
        app.set(
            &[this.targets.cta],
            &[(Prop::Opacity, 0.0), (Prop::Scale, BANNER_CTA_HIDDEN_SCALE)],
        );
        this.remeasure(dom::viewport());
        Ok(this)
    }

    /// Re-read the banner position and size, e.g. after a resize.
    pub fn remeasure(&mut self, viewport: Viewport) {
        self.set_pin(PinPhase::Before, 0.0);
        self.phase = None;
        self.start = dom::document_top(&self.spacer);
        let height = self.banner.offset_height() as f64 + pin_length(viewport);
        dom::set_style(&self.spacer, "height", &format!("{height}px"));
        log::debug!("[banner] start={:.0} spacer={:.0}", self.start, height);
    }

    pub fn update(&mut self, app: &Rc<App>, scroll_y: f64, viewport: Viewport, dt: f64) {
        let telescope = PinnedRange::new(self.start, TELESCOPE_SPAN_VIEWPORTS * viewport.height);
        let progress = self.telescope_scrub.follow(telescope.progress(scroll_y), dt);
        let frame = self.mapper.map(progress, viewport);
        if self.last_frame.as_ref() != Some(&frame) {
            self.write_frame(app, frame);
        }

        let pin = PinnedRange::new(self.start, pin_length(viewport));
        let phase = pin.phase(scroll_y);
        if self.phase != Some(phase) {
            self.set_pin(phase, pin.length);
            self.phase = Some(phase);
        }

        let pin_progress = self.pin_scrub.follow(pin.progress(scroll_y), dt);
        self.update_header(app, header_visible(pin_progress));
        self.update_cta(app, banner_cta_visible(pin_progress));
    }

    fn write_frame(&mut self, app: &App, frame: TelescopeFrame) {
        let t = &self.targets;
        app.set(&[t.container], &[(Prop::Scale, frame.container_scale)]);
        for (id, scale) in t.masks.iter().zip(frame.mask_scales.iter()) {
            app.set(&[*id], &[(Prop::Scale, *scale)]);
        }
        for (id, x) in t.intro.iter().zip(frame.intro_offsets.iter()) {
            app.set(&[*id], &[(Prop::X, *x)]);
        }
        for (id, opacity) in t.words.iter().zip(frame.word_opacity.iter()) {
            app.set(&[*id], &[(Prop::Opacity, *opacity)]);
        }
        self.last_frame = Some(frame);
    }

    fn update_header(&mut self, app: &Rc<App>, visible: bool) {
        if self.header_shown == Some(visible) {
            return;
        }
        self.header_shown = Some(visible);
        let tl: Timeline<Callback> = Timeline::new().to(
            Tween::one(self.targets.header, BANNER_FADE_SEC, Ease::Power2Out)
                .prop(Prop::Opacity, if visible { 1.0 } else { 0.0 }),
            At::End,
        );
        app.play(tl, None);
        if let Some(rotator) = &self.rotator {
            rotator.set_visible(app, visible);
        }
    }

    fn update_cta(&mut self, app: &App, visible: bool) {
        if self.cta_shown == Some(visible) {
            return;
        }
        self.cta_shown = Some(visible);
        let tween = if visible {
            Tween::one(self.targets.cta, BANNER_CTA_SHOW_SEC, Ease::BackOut(1.7))
                .prop(Prop::Opacity, 1.0)
                .prop(Prop::Scale, 1.0)
        } else {
            Tween::one(self.targets.cta, BANNER_CTA_HIDE_SEC, Ease::Power2In)
                .prop(Prop::Opacity, 0.0)
                .prop(Prop::Scale, BANNER_CTA_HIDDEN_SCALE)
        };
        app.play(Timeline::new().to(tween, At::End), None);
    }

    /// Only `position` and `top` are touched; the menus own the transform.
    fn set_pin(&self, phase: PinPhase, length: f64) {
        let b = &self.banner;
        match phase {
            PinPhase::Before => {
                for prop in ["position", "top", "left", "width"] {
                    dom::clear_style(b, prop);
                }
            }
            PinPhase::Pinned => {
                dom::set_style(b, "position", "fixed");
                dom::set_style(b, "top", "0px");
                dom::set_style(b, "left", "0px");
                dom::set_style(b, "width", "100%");
            }
            PinPhase::After => {
                dom::set_style(b, "position", "relative");
                dom::set_style(b, "top", &format!("{length}px"));
                dom::clear_style(b, "left");
                dom::clear_style(b, "width");
            }
        }
    }
}

fn pin_length(viewport: Viewport) -> f64 {
    PIN_SPAN_VIEWPORTS * viewport.height
}

/// Insert a block wrapper around the banner that reserves the pinned
/// scroll distance.
fn wrap_in_spacer(doc: &web::Document, banner: &web::HtmlElement) -> Result<web::HtmlElement, SiteError> {
    let parent = banner
        .parent_node()
        .ok_or(SiteError::MissingElement("banner parent"))?;
    let spacer = doc
        .create_element("div")
        .map_err(|e| SiteError::Js(format!("{e:?}")))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| SiteError::Js(format!("{e:?}")))?;
    spacer.set_class_name("banner-pin-spacer");
    parent
        .insert_before(&spacer, Some(banner))
        .map_err(|e| SiteError::Js(format!("{e:?}")))?;
    spacer
        .append_child(banner)
        .map_err(|e| SiteError::Js(format!("{e:?}")))?;
    Ok(spacer)
}
