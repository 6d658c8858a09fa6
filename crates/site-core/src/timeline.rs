//! Declarative tween timelines and the property stage they write into.
//!
//! A [`Timeline`] is an ordered list of tween instructions with start
//! offsets. A [`Playback`] steps it against a [`Stage`], which holds the
//! last written value of every animated property. The web layer renders
//! dirty stage targets into element styles after each step.

use crate::easing::Ease;
use fnv::{FnvHashMap, FnvHashSet};
use smallvec::SmallVec;

/// Handle for one animatable element (or a group rendered identically).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Prop {
    /// Horizontal translation in px.
    X,
    /// Horizontal translation in % of the element's own width.
    XPercent,
    /// Vertical translation in px.
    Y,
    /// Vertical translation in % of the element's own height.
    YPercent,
    /// Vertical translation in viewport heights (vh).
    YVh,
    Scale,
    ScaleX,
    Opacity,
    /// Top edge of a rectangular clip polygon, in % of height.
    ClipTop,
    /// Bottom edge of a rectangular clip polygon, in % of height.
    ClipBottom,
}

impl Prop {
    /// Value assumed when a property has never been written.
    pub fn rest_value(self) -> f64 {
        match self {
            Prop::Scale | Prop::ScaleX | Prop::Opacity => 1.0,
            Prop::ClipBottom => 100.0,
            _ => 0.0,
        }
    }
}

/// Last written property values, plus which targets changed since the last render.
#[derive(Debug, Default)]
pub struct Stage {
    values: FnvHashMap<(TargetId, Prop), f64>,
    dirty: FnvHashSet<TargetId>,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, target: TargetId, prop: Prop) -> f64 {
        self.try_get(target, prop).unwrap_or_else(|| prop.rest_value())
    }

    pub fn try_get(&self, target: TargetId, prop: Prop) -> Option<f64> {
        self.values.get(&(target, prop)).copied()
    }

    pub fn set(&mut self, target: TargetId, prop: Prop, value: f64) {
        self.values.insert((target, prop), value);
        self.dirty.insert(target);
    }

    pub fn set_many(&mut self, targets: &[TargetId], props: &[(Prop, f64)]) {
        for &t in targets {
            for &(p, v) in props {
                self.set(t, p, v);
            }
        }
    }

    /// Drain the changed targets in ascending id order.
    pub fn take_dirty(&mut self) -> Vec<TargetId> {
        let mut out: Vec<TargetId> = self.dirty.drain().collect();
        out.sort_unstable();
        out
    }
}

pub type PropSet = SmallVec<[(Prop, f64); 4]>;

/// One tween instruction: move `props` of every target to the given values.
#[derive(Clone, Debug)]
pub struct Tween {
    pub targets: Vec<TargetId>,
    pub props: PropSet,
    pub duration: f64,
    pub ease: Ease,
    pub delay: f64,
    /// Offset between consecutive targets; negative runs the list back to front.
    pub stagger: f64,
}

impl Tween {
    pub fn new(targets: Vec<TargetId>, duration: f64, ease: Ease) -> Self {
        Self {
            targets,
            props: PropSet::new(),
            duration: duration.max(0.0),
            ease,
            delay: 0.0,
            stagger: 0.0,
        }
    }

    pub fn one(target: TargetId, duration: f64, ease: Ease) -> Self {
        Self::new(vec![target], duration, ease)
    }

    pub fn prop(mut self, prop: Prop, value: f64) -> Self {
        self.props.push((prop, value));
        self
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn stagger(mut self, stagger: f64) -> Self {
        self.stagger = stagger;
        self
    }
}

/// Where an instruction starts, relative to what was added before it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum At {
    /// After everything added so far has finished.
    End,
    /// Together with the previously added instruction.
    WithPrevious,
    /// Absolute time from the start of the timeline.
    Time(f64),
    /// Offset from the previous instruction's start; may be negative.
    FromPreviousStart(f64),
}

#[derive(Clone, Debug)]
struct Scheduled {
    target: TargetId,
    props: PropSet,
    from: Option<SmallVec<[f64; 4]>>,
    start: f64,
    duration: f64,
    ease: Ease,
    done: bool,
}

pub struct Timeline<C> {
    tweens: Vec<Scheduled>,
    cues: Vec<(f64, Option<C>)>,
    prev_start: f64,
    end: f64,
}

impl<C> Default for Timeline<C> {
    fn default() -> Self {
        Self {
            tweens: Vec::new(),
            cues: Vec::new(),
            prev_start: 0.0,
            end: 0.0,
        }
    }
}

impl<C> Timeline<C> {
    pub fn new() -> Self {
        Self::default()
    }

    fn resolve(&self, at: At) -> f64 {
        match at {
            At::End => self.end,
            At::WithPrevious => self.prev_start,
            At::Time(t) => t.max(0.0),
            At::FromPreviousStart(dt) => (self.prev_start + dt).max(0.0),
        }
    }

    pub fn to(mut self, tween: Tween, at: At) -> Self {
        let start = self.resolve(at) + tween.delay;
        let n = tween.targets.len();
        for (i, &target) in tween.targets.iter().enumerate() {
            let slot = if tween.stagger < 0.0 { n - 1 - i } else { i };
            let s = start + slot as f64 * tween.stagger.abs();
            self.end = self.end.max(s + tween.duration);
            self.tweens.push(Scheduled {
                target,
                props: tween.props.clone(),
                from: None,
                start: s,
                duration: tween.duration,
                ease: tween.ease,
                done: false,
            });
        }
        self.prev_start = start;
        self
    }

    /// Zero-duration tween: jump straight to the values at `at`.
    pub fn set(self, targets: Vec<TargetId>, props: &[(Prop, f64)], at: At) -> Self {
        let mut tween = Tween::new(targets, 0.0, Ease::Linear);
        tween.props.extend_from_slice(props);
        self.to(tween, at)
    }

    /// Fire `cue` once playback reaches `at`.
    pub fn cue(mut self, cue: C, at: At) -> Self {
        let time = self.resolve(at);
        self.cues.push((time, Some(cue)));
        self.end = self.end.max(time);
        self.prev_start = time;
        self
    }

    /// Total length: the latest end of any instruction or cue.
    pub fn duration(&self) -> f64 {
        self.end
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty() && self.cues.is_empty()
    }

    /// Every (target, prop) pair some tween of this timeline writes.
    pub fn pairs(&self) -> FnvHashSet<(TargetId, Prop)> {
        self.tweens
            .iter()
            .flat_map(|t| t.props.iter().map(move |&(p, _)| (t.target, p)))
            .collect()
    }

    /// Start times of the scheduled per-target tweens, in declaration order.
    pub fn start_times(&self) -> Vec<f64> {
        self.tweens.iter().map(|t| t.start).collect()
    }
}

pub struct Step<C> {
    pub cues: Vec<C>,
    pub finished: bool,
}

/// A timeline being played back.
pub struct Playback<C> {
    timeline: Timeline<C>,
    elapsed: f64,
    next_cue: usize,
    finished: bool,
}

impl<C> Playback<C> {
    pub fn new(mut timeline: Timeline<C>) -> Self {
        timeline
            .cues
            .sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        Self {
            timeline,
            elapsed: 0.0,
            next_cue: 0,
            finished: false,
        }
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Stop writing `pairs` from every unfinished tween; a newer timeline
    /// owns them now. A tween left without properties counts as done.
    pub fn release(&mut self, pairs: &FnvHashSet<(TargetId, Prop)>) {
        for tw in self.timeline.tweens.iter_mut().filter(|t| !t.done) {
            let mut i = 0;
            while i < tw.props.len() {
                if pairs.contains(&(tw.target, tw.props[i].0)) {
                    tw.props.remove(i);
                    if let Some(from) = tw.from.as_mut() {
                        from.remove(i);
                    }
                } else {
                    i += 1;
                }
            }
            if tw.props.is_empty() {
                tw.done = true;
            }
        }
    }

    /// Advance by `dt` seconds and write every active tween into `stage`.
    ///
    /// A tween captures its start values the first step it becomes active and
    /// writes its exact end values exactly once. `finished` turns true only on
    /// the step after which no tween or cue is left.
    pub fn advance(&mut self, dt: f64, stage: &mut Stage) -> Step<C> {
        if self.finished {
            return Step {
                cues: Vec::new(),
                finished: true,
            };
        }
        self.elapsed += dt.max(0.0);
        let now = self.elapsed;

        for tw in self.timeline.tweens.iter_mut() {
            if tw.done || now < tw.start {
                continue;
            }
            let from = tw
                .from
                .get_or_insert_with(|| tw.props.iter().map(|&(p, _)| stage.get(tw.target, p)).collect());
            let local = if tw.duration <= 0.0 {
                1.0
            } else {
                ((now - tw.start) / tw.duration).min(1.0)
            };
            if local >= 1.0 {
                for &(p, v) in tw.props.iter() {
                    stage.set(tw.target, p, v);
                }
                tw.done = true;
            } else {
                let k = tw.ease.apply(local);
                for (&(p, to), &start) in tw.props.iter().zip(from.iter()) {
                    stage.set(tw.target, p, start + (to - start) * k);
                }
            }
        }

        let mut cues = Vec::new();
        while let Some((time, cue)) = self.timeline.cues.get_mut(self.next_cue) {
            if *time > now {
                break;
            }
            if let Some(c) = cue.take() {
                cues.push(c);
            }
            self.next_cue += 1;
        }

        let all_done = self.timeline.tweens.iter().all(|t| t.done);
        let cues_done = self.next_cue >= self.timeline.cues.len();
        self.finished = all_done && cues_done && now >= self.timeline.end;
        Step {
            cues,
            finished: self.finished,
        }
    }
}

struct Running<C> {
    playback: Playback<C>,
    on_complete: Option<C>,
}

/// Every timeline currently playing, in start order.
///
/// The latest timeline wins: playing a timeline releases the same
/// (target, prop) pairs from every older one still running.
pub struct Player<C> {
    running: Vec<Running<C>>,
}

impl<C> Default for Player<C> {
    fn default() -> Self {
        Self {
            running: Vec::new(),
        }
    }
}

impl<C> Player<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.running.len()
    }

    pub fn is_empty(&self) -> bool {
        self.running.is_empty()
    }

    pub fn play(&mut self, timeline: Timeline<C>, on_complete: Option<C>) {
        let pairs = timeline.pairs();
        for r in self.running.iter_mut() {
            r.playback.release(&pairs);
        }
        self.running.push(Running {
            playback: Playback::new(timeline),
            on_complete,
        });
    }

    /// Step every timeline. Cues and completions come back in start order,
    /// each timeline's cues ahead of its own completion.
    pub fn advance(&mut self, dt: f64, stage: &mut Stage) -> Vec<C> {
        let mut fired = Vec::new();
        for r in self.running.iter_mut() {
            let step = r.playback.advance(dt, stage);
            fired.extend(step.cues);
            if step.finished {
                fired.extend(r.on_complete.take());
            }
        }
        self.running.retain(|r| !r.playback.is_finished());
        fired
    }
}
