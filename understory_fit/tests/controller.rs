// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `FitController`.
//!
//! These drive the controller through a recording host and check when
//! recomputations happen and what reaches the root content blocks.

use kurbo::Size;
use understory_fit::{
    AlignmentMode, FitConfig, FitController, FitHost, FitTransform, Margin, Recompute,
    TriggerState,
};

/// Content tree where some blocks are nested inside others.
#[derive(Debug)]
struct Deck {
    container: Size,
    /// `(id, parent)` pairs.
    blocks: Vec<(u32, Option<u32>)>,
    sized: Vec<(u32, Size)>,
    applied: Vec<(u32, FitTransform)>,
}

impl Deck {
    fn new(container: Size) -> Self {
        Self {
            container,
            blocks: vec![(1, None), (2, None), (3, Some(2)), (4, None)],
            sized: Vec::new(),
            applied: Vec::new(),
        }
    }

    fn last_applied(&self) -> Option<FitTransform> {
        self.applied.last().map(|(_, t)| *t)
    }
}

impl FitHost for Deck {
    type Block = u32;

    fn container_size(&self) -> Size {
        self.container
    }

    fn root_blocks(&self) -> Vec<u32> {
        self.blocks
            .iter()
            .filter(|(_, parent)| parent.is_none())
            .map(|(id, _)| *id)
            .collect()
    }

    fn size_block(&mut self, block: &u32, design: Size) {
        self.sized.push((*block, design));
    }

    fn apply_transform(&mut self, block: &u32, transform: &FitTransform) {
        self.applied.push((*block, *transform));
    }
}

fn center_config() -> FitConfig {
    FitConfig::new(Size::new(800.0, 600.0))
        .unwrap()
        .with_mode(AlignmentMode::CenterMiddle)
        .with_debounce_ms(200)
}

#[test]
fn only_root_blocks_are_sized_and_transformed() {
    let mut fit = FitController::new(center_config(), Deck::new(Size::new(1600.0, 900.0))).unwrap();
    let t = fit.start().transform().unwrap();

    let deck = fit.into_host();
    let ids: Vec<u32> = deck.applied.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, vec![1, 2, 4]);
    assert!(deck.applied.iter().all(|(_, applied)| *applied == t));
    assert_eq!(
        deck.sized,
        vec![
            (1, Size::new(800.0, 600.0)),
            (2, Size::new(800.0, 600.0)),
            (4, Size::new(800.0, 600.0)),
        ]
    );
}

#[test]
fn resize_burst_recomputes_once_after_last_signal() {
    let mut fit = FitController::new(center_config(), Deck::new(Size::new(800.0, 600.0))).unwrap();
    fit.start();
    let before = fit.host().applied.len();

    fit.host_mut().container = Size::new(1600.0, 900.0);
    for now in [1_000, 1_100, 1_250, 1_400] {
        fit.on_container_resize(now);
    }
    assert_eq!(fit.state(), TriggerState::PendingRecompute);
    assert_eq!(fit.pending_deadline(), Some(1_600));

    let mut runs = Vec::new();
    for now in 1_400..=2_000 {
        if let Some(r) = fit.poll(now) {
            runs.push((now, r));
        }
    }
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].0, 1_600);
    assert_eq!(fit.state(), TriggerState::Idle);
    assert_eq!(fit.host().applied.len(), before + 3);
    assert_eq!(fit.last_transform().map(|t| t.scale_x), Some(1.5));
}

#[test]
fn superseded_timer_tokens_do_not_fire() {
    let mut fit = FitController::new(center_config(), Deck::new(Size::new(1600.0, 900.0))).unwrap();
    let stale = fit.on_container_resize(0);
    let current = fit.on_container_resize(100);

    assert_eq!(fit.on_timer(stale), None);
    assert!(fit.host().applied.is_empty());

    assert!(matches!(fit.on_timer(current), Some(Recompute::Applied(_))));
    assert_eq!(fit.on_timer(current), None);
}

#[test]
fn content_load_recomputes_immediately() {
    let mut fit = FitController::new(center_config(), Deck::new(Size::new(1600.0, 900.0))).unwrap();
    fit.on_container_resize(0);

    let r = fit.on_content_load();
    assert!(matches!(r, Recompute::Applied(_)));
    assert_eq!(fit.host().applied.len(), 3);
    // The pending resize still runs afterwards.
    assert_eq!(fit.state(), TriggerState::PendingRecompute);
    assert!(fit.poll(200).is_some());
}

#[test]
fn toggle_during_resize_yields_identity_immediately() {
    let mut fit = FitController::new(center_config(), Deck::new(Size::new(1600.0, 900.0))).unwrap();
    fit.start();
    assert_ne!(fit.host().last_applied(), Some(FitTransform::IDENTITY));

    fit.host_mut().container = Size::new(2000.0, 1000.0);
    fit.on_container_resize(10);
    let r = fit.on_toggle_enabled();
    assert_eq!(r, Recompute::Applied(FitTransform::IDENTITY));
    assert!(!fit.is_enabled());
    assert_eq!(fit.host().last_applied(), Some(FitTransform::IDENTITY));

    // The pending resize runs against the disabled configuration.
    let late = fit.poll(210).and_then(|r| r.transform());
    assert_eq!(late, Some(FitTransform::IDENTITY));

    // Toggling back restores scaling for the new size.
    let t = fit.on_toggle_enabled().transform().unwrap();
    assert_eq!(t.scale_x, 5.0 / 3.0);
}

#[test]
fn enable_and_disable_are_explicit() {
    let config = center_config()
        .with_margin(Margin::uniform(10.0))
        .unwrap()
        .with_enabled(false);
    let mut fit = FitController::new(config, Deck::new(Size::new(1640.0, 1240.0))).unwrap();
    assert!(!fit.is_enabled());

    assert_eq!(fit.disable(), Recompute::Applied(FitTransform::IDENTITY));
    let t = fit.enable().transform().unwrap();
    assert_eq!((t.scale_x, t.scale_y), (2.0, 2.0));
    assert_eq!(fit.config().margin, Margin::uniform(10.0));
}

#[test]
fn zero_sized_container_is_skipped_and_retried_by_next_signal() {
    let mut fit = FitController::new(center_config(), Deck::new(Size::new(0.0, 0.0))).unwrap();
    assert!(matches!(fit.start(), Recompute::Skipped(_)));
    assert_eq!(fit.last_transform(), None);
    assert!(fit.host().applied.is_empty());

    fit.host_mut().container = Size::new(400.0, 300.0);
    let token = fit.on_container_resize(5);
    let t = fit.on_timer(token).and_then(|r| r.transform()).unwrap();
    assert_eq!(t.scale_x, 0.5);
}
