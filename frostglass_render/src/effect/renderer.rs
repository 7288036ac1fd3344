// Copyright 2026 the Frostglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The effect renderer: animation state plus an incrementally updated plan.
//!
//! Each draw item occupies a fixed slot in the [`RenderPlan`]. Two virtual
//! dirty keys sit above the slots:
//!
//! ```text
//!   SURFACE ──LAYOUT──► every slot
//!   PANEL   ──SCALE───► Frost, Border, Label
//!                       Border ◄── ROTATION (marked directly)
//! ```
//!
//! A frame marks the channels whose inputs changed, drains them, and
//! rebuilds only the affected slots. Damage is the union of each rebuilt
//! slot's old and new bounds, or the whole surface after a relayout.

use frostglass_core::density::Density;
use frostglass_core::dirty;
use frostglass_core::surface::SurfaceId;
use frostglass_core::time::Timebase;
use frostglass_core::timing::FrameTick;
use kurbo::{Point, Size};
use understory_dirty::{CycleHandling, DirtyTracker, EagerPolicy};

use super::context::{BACKDROP_COLOR, EffectRenderContext, PALETTE};
use super::layout::{EffectLayout, LABEL_TEXT};
use crate::{Brush, Color, DamageRegion, Material, RenderItem, RenderPlan};

/// Position of a draw item in the effect's render plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemSlot {
    /// Full-bleed backdrop fill.
    Backdrop,
    /// One of the four background circles, by palette index.
    Circle(u8),
    /// The frosted panel.
    Frost,
    /// The rotating gradient border.
    Border,
    /// The label.
    Label,
}

impl ItemSlot {
    /// Number of slots in the plan.
    pub const COUNT: usize = 8;

    /// Every slot in drawing order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Backdrop,
        Self::Circle(0),
        Self::Circle(1),
        Self::Circle(2),
        Self::Circle(3),
        Self::Frost,
        Self::Border,
        Self::Label,
    ];

    /// Returns the plan index of this slot.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Backdrop => 0,
            Self::Circle(i) => 1 + i as usize,
            Self::Frost => 5,
            Self::Border => 6,
            Self::Label => 7,
        }
    }

    /// Returns the slot at a plan index, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns `true` for slots that follow the press scale.
    #[must_use]
    pub const fn is_scaled(self) -> bool {
        matches!(self, Self::Frost | Self::Border | Self::Label)
    }

    #[expect(clippy::cast_possible_truncation, reason = "slot indices are below 8")]
    const fn key(self) -> u32 {
        self.index() as u32
    }
}

/// Virtual dirty key standing for the surface geometry.
const SURFACE_KEY: u32 = ItemSlot::Label.key() + 1;
/// Virtual dirty key standing for the scaled panel.
const PANEL_KEY: u32 = SURFACE_KEY + 1;

/// What one [`GlassEffect::frame`] produced.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameOutput {
    /// Frame counter from the tick.
    pub frame_index: u64,
    /// Border gradient angle in degrees.
    pub angle: f64,
    /// Panel scale.
    pub scale: f64,
    /// Press state.
    pub pressed: bool,
    /// Area that must be repainted.
    pub damage: DamageRegion,
    /// Slots rebuilt this frame, in drawing order.
    pub updated: Vec<ItemSlot>,
}

/// One mounted glass effect.
///
/// Created when a surface becomes renderable and dropped when it stops being
/// renderable. The plan is valid after construction; [`frame`](Self::frame)
/// keeps it current.
#[derive(Debug)]
pub struct GlassEffect {
    context: EffectRenderContext,
    layout: EffectLayout,
    density: Option<Density>,
    pending_size: Option<Size>,
    plan: RenderPlan,
    dirty: DirtyTracker<u32>,
}

impl GlassEffect {
    /// Creates an effect for a surface of `size` pixels.
    ///
    /// The first frame repaints the whole surface.
    #[must_use]
    pub fn new(
        surface: SurfaceId,
        size: Size,
        density: Option<Density>,
        timebase: Timebase,
    ) -> Self {
        let mut dirty = DirtyTracker::with_cycle_handling(CycleHandling::Error);
        for slot in ItemSlot::ALL {
            let _ = dirty.add_dependency(slot.key(), SURFACE_KEY, dirty::LAYOUT);
            if slot.is_scaled() {
                let _ = dirty.add_dependency(slot.key(), PANEL_KEY, dirty::SCALE);
            }
        }

        let context = EffectRenderContext::new(timebase);
        let layout = EffectLayout::compute(size, density);
        let mut plan = RenderPlan::new(surface, size);
        plan.items = ItemSlot::ALL
            .iter()
            .map(|&slot| build_item(slot, &layout, &context))
            .collect();

        let mut effect = Self {
            context,
            layout,
            density,
            pending_size: None,
            plan,
            dirty,
        };
        effect.mark_layout();
        effect
    }

    /// Advances the animations to `tick` and brings the plan up to date.
    pub fn frame(&mut self, tick: &FrameTick) -> FrameOutput {
        if let Some(size) = self.pending_size.take() {
            self.layout = EffectLayout::compute(size, self.density);
            self.plan.size = size;
            self.mark_layout();
        }

        let scale_moved = self.context.advance(tick);
        self.dirty.mark(ItemSlot::Border.key(), dirty::ROTATION);
        if scale_moved {
            self.dirty.mark_with(PANEL_KEY, dirty::SCALE, &EagerPolicy);
        }

        // Drain LAYOUT first: a relayout rebuilds everything and damages the
        // whole surface, so the other channels only need to be consumed.
        let relayout: Vec<u32> = self
            .dirty
            .drain(dirty::LAYOUT)
            .affected()
            .deterministic()
            .run()
            .collect();
        let scaled: Vec<u32> = self
            .dirty
            .drain(dirty::SCALE)
            .affected()
            .deterministic()
            .run()
            .collect();
        let rotated: Vec<u32> = self
            .dirty
            .drain(dirty::ROTATION)
            .deterministic()
            .run()
            .collect();

        let mut touched = [false; ItemSlot::COUNT];
        for key in relayout.iter().chain(&scaled).chain(&rotated) {
            if let Some(flag) = touched.get_mut(*key as usize) {
                *flag = true;
            }
        }

        let mut damage = if relayout.is_empty() {
            DamageRegion::None
        } else {
            DamageRegion::Full
        };
        let mut updated = Vec::new();
        for slot in ItemSlot::ALL {
            if !touched[slot.index()] {
                continue;
            }
            let item = build_item(slot, &self.layout, &self.context);
            let old = core::mem::replace(&mut self.plan.items[slot.index()], item);
            if old != self.plan.items[slot.index()] {
                damage.add_rect(old.bounds().union(self.plan.items[slot.index()].bounds()));
            }
            updated.push(slot);
        }

        FrameOutput {
            frame_index: tick.frame_index,
            angle: self.context.angle(),
            scale: self.context.scale(),
            pressed: self.context.is_pressed(),
            damage,
            updated,
        }
    }

    /// Toggles the press state if `point` lies on the surface.
    ///
    /// Returns the new scale target, or `None` for a tap outside the bounds.
    pub fn tap(&mut self, point: Point) -> Option<f64> {
        self.layout
            .contains(point)
            .then(|| self.context.toggle_pressed())
    }

    /// Schedules a relayout for the next frame.
    ///
    /// A resize to the current size is ignored.
    pub fn resize(&mut self, size: Size) {
        let current = self.pending_size.unwrap_or(self.layout.size);
        if size != current {
            self.pending_size = Some(size);
        }
    }

    /// Returns the current render plan.
    #[inline]
    #[must_use]
    pub fn plan(&self) -> &RenderPlan {
        &self.plan
    }

    /// Returns the current layout.
    #[inline]
    #[must_use]
    pub fn layout(&self) -> &EffectLayout {
        &self.layout
    }

    /// Returns the animation state.
    #[inline]
    #[must_use]
    pub fn context(&self) -> &EffectRenderContext {
        &self.context
    }

    /// Returns the surface this effect draws into.
    #[inline]
    #[must_use]
    pub fn surface(&self) -> SurfaceId {
        self.plan.surface
    }

    fn mark_layout(&mut self) {
        self.dirty.mark_with(SURFACE_KEY, dirty::LAYOUT, &EagerPolicy);
    }
}

/// Builds the draw item for one slot from the current layout and animation.
fn build_item(slot: ItemSlot, layout: &EffectLayout, context: &EffectRenderContext) -> RenderItem {
    let transform = layout.scale_transform(context.scale());
    match slot {
        ItemSlot::Backdrop => RenderItem::Fill {
            rect: layout.backdrop,
            color: BACKDROP_COLOR,
        },
        ItemSlot::Circle(i) => RenderItem::Circle {
            circle: layout.circles[usize::from(i)],
            color: PALETTE[usize::from(i)],
        },
        ItemSlot::Frost => RenderItem::BackdropBlur {
            region: layout.panel,
            transform,
            material: Material::ultra_thin(BACKDROP_COLOR).resolve(layout.density),
            samples: ItemSlot::Backdrop.index()..ItemSlot::Frost.index(),
        },
        ItemSlot::Border => {
            let (start, end) = layout.gradient_line(context.angle());
            RenderItem::Stroke {
                shape: layout.border,
                clip: layout.panel,
                width: layout.border_width,
                brush: Brush::LinearGradient {
                    start,
                    end,
                    stops: &PALETTE,
                },
                transform,
            }
        }
        ItemSlot::Label => RenderItem::Text {
            text: LABEL_TEXT,
            color: Color::WHITE,
            bounds: layout.label_bounds,
            transform,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frostglass_core::time::HostTime;
    use kurbo::Rect;

    const FRAME_NS: u64 = 16_666_667;

    fn effect() -> GlassEffect {
        GlassEffect::new(
            SurfaceId(1),
            Size::new(400.0, 800.0),
            None,
            Timebase::NANOS,
        )
    }

    fn tick(index: u64) -> FrameTick {
        FrameTick {
            now: HostTime(1_000_000_000 + index * FRAME_NS),
            refresh_interval: Some(FRAME_NS),
            frame_index: index,
        }
    }

    #[test]
    fn slots_round_trip_through_indices() {
        for (idx, slot) in ItemSlot::ALL.iter().enumerate() {
            assert_eq!(slot.index(), idx);
            assert_eq!(ItemSlot::from_index(idx), Some(*slot));
        }
        assert_eq!(ItemSlot::from_index(ItemSlot::COUNT), None);
    }

    #[test]
    fn plan_is_ordered_and_blur_samples_only_prior_items() {
        let fx = effect();
        let plan = fx.plan();
        assert_eq!(plan.items.len(), ItemSlot::COUNT);
        assert!(matches!(plan.items[0], RenderItem::Fill { color, .. } if color == BACKDROP_COLOR));
        for i in 0..4 {
            assert!(
                matches!(plan.items[1 + i], RenderItem::Circle { color, .. } if color == PALETTE[i])
            );
        }
        assert!(plan.items[5].is_blur());
        assert!(matches!(plan.items[6], RenderItem::Stroke { .. }));
        assert!(matches!(plan.items[7], RenderItem::Text { text: "Filled", .. }));
        assert!(plan.blur_samples_only_prior_items());
        let RenderItem::BackdropBlur { samples, .. } = &plan.items[5] else {
            panic!("slot 5 is the frost pass");
        };
        assert_eq!(*samples, 0..5, "frost samples the backdrop and circles");
    }

    #[test]
    fn first_frame_is_full_and_starts_at_zero_degrees() {
        let mut fx = effect();
        let out = fx.frame(&tick(0));
        assert_eq!(out.angle, 0.0);
        assert_eq!(out.scale, 1.0);
        assert!(!out.pressed);
        assert!(out.damage.is_full());
        assert_eq!(out.updated, ItemSlot::ALL.to_vec());
    }

    #[test]
    fn steady_frames_only_update_the_border() {
        let mut fx = effect();
        let _ = fx.frame(&tick(0));
        let out = fx.frame(&tick(1));
        assert!(out.angle > 0.0);
        assert_eq!(out.updated, vec![ItemSlot::Border]);
        assert_eq!(out.damage.rect_count(), 1);
        let bounds = out.damage.bounding_box(fx.plan().bounds());
        assert_eq!(
            bounds,
            Some(Rect::new(30.0, 150.0, 370.0, 650.0)),
            "border damage stays inside the panel"
        );
    }

    #[test]
    fn press_updates_scaled_items_until_spring_settles() {
        let mut fx = effect();
        let _ = fx.frame(&tick(0));
        assert_eq!(fx.tap(Point::new(200.0, 400.0)), Some(1.1));

        let out = fx.frame(&tick(1));
        assert!(out.pressed);
        assert!(out.scale > 1.0);
        assert_eq!(
            out.updated,
            vec![ItemSlot::Frost, ItemSlot::Border, ItemSlot::Label]
        );

        let mut peak: f64 = 0.0;
        let mut index = 2;
        while !fx.context().is_scale_settled() {
            let out = fx.frame(&tick(index));
            peak = peak.max(out.scale);
            index += 1;
            assert!(index < 600, "spring should settle within ten seconds");
        }
        assert!(peak > 1.1, "press spring overshoots, peak {peak}");
        assert_eq!(fx.context().scale(), 1.1);

        let out = fx.frame(&tick(index));
        assert_eq!(out.updated, vec![ItemSlot::Border]);
    }

    #[test]
    fn alternate_taps_toggle_targets() {
        let mut fx = effect();
        assert_eq!(fx.tap(Point::new(1.0, 1.0)), Some(1.1));
        assert_eq!(fx.tap(Point::new(1.0, 1.0)), Some(1.0));
        assert_eq!(fx.tap(Point::new(399.0, 799.0)), Some(1.1));
    }

    #[test]
    fn tap_outside_bounds_is_ignored() {
        let mut fx = effect();
        assert_eq!(fx.tap(Point::new(-1.0, 10.0)), None);
        assert_eq!(fx.tap(Point::new(400.0, 10.0)), None);
        assert!(!fx.context().is_pressed());
    }

    #[test]
    fn resize_relayouts_on_next_frame() {
        let mut fx = effect();
        let _ = fx.frame(&tick(0));
        fx.resize(Size::new(800.0, 800.0));
        assert_eq!(fx.layout().size, Size::new(400.0, 800.0));
        let out = fx.frame(&tick(1));
        assert!(out.damage.is_full());
        assert_eq!(out.updated.len(), ItemSlot::COUNT);
        assert_eq!(fx.layout().panel_center, Point::new(400.0, 400.0));
        assert_eq!(fx.plan().size, Size::new(800.0, 800.0));

        fx.resize(Size::new(800.0, 800.0));
        let out = fx.frame(&tick(2));
        assert!(!out.damage.is_full(), "same size does not relayout");
    }

    #[test]
    fn rotation_is_monotonic_within_a_period() {
        let mut fx = effect();
        let mut prev = fx.frame(&tick(0)).angle;
        // 2.5 s at 60 Hz is 150 frames.
        for i in 1..149 {
            let angle = fx.frame(&tick(i)).angle;
            assert!(angle >= prev, "frame {i}: {angle} < {prev}");
            prev = angle;
        }
        let wrapped = fx.frame(&tick(151)).angle;
        assert!(wrapped < prev, "rotation restarts after one period");
    }
}
