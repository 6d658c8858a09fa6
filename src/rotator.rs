//! Service word rotation in the banner header.

use crate::animator::Callback;
use crate::app::App;
use crate::constants::*;
use crate::dom;
use gloo_timers::callback::Interval;
use site_core::constants::{ROTATOR_PERIOD_MS, ROTATOR_WORDS};
use site_core::rotator::{Swap, TextRotator, TimerCommand};
use site_core::{At, Ease, Prop, SiteError, TargetId, Timeline, Tween};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct Rotator {
    words: RefCell<TextRotator>,
    slots: Vec<(web::HtmlElement, TargetId)>,
    timer: RefCell<Option<Interval>>,
}

impl Rotator {
    pub fn setup(app: &App) -> Result<Rc<Self>, SiteError> {
        let elements = dom::query_all_html(&app.document, SEL_ROTATING_TEXT);
        if elements.is_empty() {
            return Err(SiteError::MissingElement(SEL_ROTATING_TEXT));
        }
        let words = TextRotator::new(&ROTATOR_WORDS, elements.len());
        let slots: Vec<_> = elements
            .into_iter()
            .enumerate()
            .map(|(i, el)| {
                el.set_text_content(words.word_for(i));
                let id = app.register(vec![el.clone()]);
                (el, id)
            })
            .collect();
        log::info!("[rotator] {} slots", slots.len());
        Ok(Rc::new(Self {
            words: RefCell::new(words),
            slots,
            timer: RefCell::new(None),
        }))
    }

    /// Follow the banner header visibility: arm the timer when shown,
    /// drop it when hidden.
    pub fn set_visible(self: &Rc<Self>, app: &Rc<App>, visible: bool) {
        let command = self.words.borrow_mut().set_visible(visible);
        match command {
            TimerCommand::Arm => {
                let this = self.clone();
                let app = app.clone();
                let interval = Interval::new(ROTATOR_PERIOD_MS, move || this.tick(&app));
                *self.timer.borrow_mut() = Some(interval);
                log::debug!("[rotator] armed");
            }
            TimerCommand::Clear => {
                if let Some(interval) = self.timer.borrow_mut().take() {
                    interval.cancel();
                }
                log::debug!("[rotator] cleared");
            }
            TimerCommand::Keep => {}
        }
    }

    fn tick(self: &Rc<Self>, app: &Rc<App>) {
        let Some(swap) = self.words.borrow_mut().tick() else {
            return;
        };
        let this = self.clone();
        let done: Callback = Box::new(move || this.words.borrow_mut().finish_swap());
        app.play(self.swap_timeline(swap), Some(done));
    }

    fn swap_timeline(&self, swap: Swap) -> Timeline<Callback> {
        let ids: Vec<TargetId> = self.slots.iter().map(|(_, id)| *id).collect();
        let texts: Vec<(web::HtmlElement, &'static str)> = swap
            .iter()
            .filter_map(|(slot, word)| self.slots.get(*slot).map(|(el, _)| (el.clone(), *word)))
            .collect();
        let set_text: Callback = Box::new(move || {
            for (el, word) in texts {
                el.set_text_content(Some(word));
            }
        });
        Timeline::new()
            .to(
                Tween::new(ids.clone(), ROTATE_OUT_SEC, Ease::Power2In)
                    .prop(Prop::Y, -ROTATE_TRAVEL_PX)
                    .prop(Prop::Opacity, 0.0),
                At::End,
            )
            .cue(set_text, At::End)
            .set(ids.clone(), &[(Prop::Y, ROTATE_TRAVEL_PX), (Prop::Opacity, 0.0)], At::End)
            .to(
                Tween::new(ids, ROTATE_IN_SEC, Ease::Power2Out)
                    .prop(Prop::Y, 0.0)
                    .prop(Prop::Opacity, 1.0),
                At::End,
            )
    }
}
