// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Scene graph tests: world transform composition, reparenting and handles

use std::f64::consts::{FRAC_PI_2, PI};

use kinetic2d::render::{shared, RecordingContext};
use kinetic2d::scene::{GameObjectConfig, ObjectId, Scene};
use kinetic2d::math::Point;
use kinetic2d::KineticError;

const EPSILON: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {}, got {}",
        expected,
        actual
    );
}

fn assert_world_position(scene: &Scene, id: ObjectId, x: f64, y: f64) {
    let world = scene.get(id).unwrap().world();
    assert_close(world.x, x);
    assert_close(world.y, y);
}

// root (100, 100) scale 2 -> arm (10, 0) rotated 90° -> hand (5, 0)
fn three_levels() -> (Scene, ObjectId, ObjectId, ObjectId) {
    let mut scene = Scene::with_context(shared(RecordingContext::new()));
    let hand = scene.spawn(
        GameObjectConfig::new(1.0, 1.0)
            .at(5.0, 0.0)
            .with_opacity(0.5),
    );
    let arm = scene.spawn(
        GameObjectConfig::new(4.0, 2.0)
            .at(10.0, 0.0)
            .with_rotation(FRAC_PI_2)
            .with_opacity(0.5)
            .with_children(vec![hand]),
    );
    let root = scene.spawn(
        GameObjectConfig::new(8.0, 8.0)
            .at(100.0, 100.0)
            .with_scale(2.0, 2.0)
            .with_children(vec![arm]),
    );
    (scene, root, arm, hand)
}

#[test]
fn test_multi_level_composition() {
    let (scene, _root, arm, hand) = three_levels();

    assert_world_position(&scene, arm, 120.0, 100.0);
    assert_world_position(&scene, hand, 120.0, 110.0);

    let arm_world = scene.get(arm).unwrap().world();
    assert_eq!((arm_world.width, arm_world.height), (8.0, 4.0));
    assert_close(arm_world.rotation, FRAC_PI_2);

    let hand_world = scene.get(hand).unwrap().world();
    assert_eq!((hand_world.scale_x, hand_world.scale_y), (2.0, 2.0));
    assert_eq!((hand_world.width, hand_world.height), (2.0, 2.0));
    assert_close(hand_world.opacity, 0.25);
}

#[test]
fn test_parent_changes_propagate_to_descendants() {
    let (mut scene, root, _arm, hand) = three_levels();

    scene.modify(root, |object| object.set_position(0.0, 0.0));
    assert_world_position(&scene, hand, 20.0, 10.0);

    scene.modify(root, |object| object.set_scale(1.0, 1.0));
    assert_world_position(&scene, hand, 10.0, 5.0);
}

#[test]
fn test_parent_rotation_propagates() {
    let (mut scene, root, arm, hand) = three_levels();

    scene.modify(root, |object| object.set_rotation(FRAC_PI_2));

    assert_close(scene.get(arm).unwrap().world().rotation, PI);
    assert_close(scene.get(hand).unwrap().world().rotation, PI);
    assert_world_position(&scene, arm, 100.0, 120.0);
    assert_world_position(&scene, hand, 90.0, 120.0);
}

#[test]
fn test_parent_opacity_propagates() {
    let (mut scene, root, arm, hand) = three_levels();

    scene.modify(root, |object| object.set_opacity(0.5));

    assert_close(scene.get(arm).unwrap().world().opacity, 0.25);
    assert_close(scene.get(hand).unwrap().world().opacity, 0.125);

    scene.modify(root, |object| object.set_opacity(0.0));
    assert_close(scene.get(hand).unwrap().world().opacity, 0.0);
}

#[test]
fn test_parent_anchor_change_keeps_world_consistent() {
    let (mut scene, root, arm, hand) = three_levels();
    scene.modify(root, |object| object.set_opacity(0.5));

    scene.modify(root, |object| {
        object.set_anchor(Point::new(0.5, 0.5));
        object.set_rotation(FRAC_PI_2);
    });

    assert_eq!(scene.get(root).unwrap().anchor(), Point::new(0.5, 0.5));
    assert_close(scene.get(arm).unwrap().world().rotation, PI);
    assert_close(scene.get(hand).unwrap().world().opacity, 0.125);
    assert_world_position(&scene, hand, 90.0, 120.0);
}

#[test]
fn test_parent_motion_moves_children() {
    let (mut scene, root, _arm, hand) = three_levels();

    scene.modify(root, |object| object.body_mut().set_dx(1.0));
    scene.update_roots(0.0);

    assert_world_position(&scene, hand, 121.0, 110.0);
}

#[test]
fn test_remove_child_reverts_to_local() {
    let (mut scene, root, arm, hand) = three_levels();

    assert!(scene.remove_child(root, arm));

    assert_world_position(&scene, arm, 10.0, 0.0);
    assert_world_position(&scene, hand, 10.0, 5.0);
    assert_eq!(scene.roots(), &[root, arm]);
}

#[test]
fn test_reparent_recomposes_subtree() {
    let (mut scene, root, arm, hand) = three_levels();
    let anchor = scene.spawn(GameObjectConfig::new(1.0, 1.0).at(-50.0, 0.0));

    scene.add_child(anchor, arm).unwrap();

    assert_eq!(scene.parent(arm), Some(anchor));
    assert!(scene.children(root).is_empty());
    assert_world_position(&scene, arm, -40.0, 0.0);
    assert_world_position(&scene, hand, -40.0, 5.0);
}

#[test]
fn test_cycles_are_rejected_without_side_effects() {
    let (mut scene, root, arm, hand) = three_levels();

    assert_eq!(
        scene.add_child(hand, root),
        Err(KineticError::HierarchyCycle { parent: hand, child: root })
    );
    assert_eq!(scene.parent(root), None);
    assert_eq!(scene.children(root), &[arm]);
    assert_world_position(&scene, hand, 120.0, 110.0);
}

#[test]
fn test_stale_handles_are_inert() {
    let (mut scene, root, arm, hand) = three_levels();

    assert!(scene.despawn(arm));
    assert_eq!(scene.len(), 1);

    assert!(scene.get(hand).is_none());
    assert!(scene.modify(arm, |object| object.set_x(1.0)).is_none());
    assert!(!scene.remove_child(root, arm));
    assert_eq!(scene.add_child(root, hand), Err(KineticError::StaleObject(hand)));

    scene.update(arm, 0.0);
    scene.render(arm);

    let replacement = scene.spawn(GameObjectConfig::new(1.0, 1.0));
    assert_ne!(replacement, arm);
    assert_ne!(replacement, hand);
    assert!(scene.get(arm).is_none());
    assert!(scene.contains(replacement));
}

#[test]
fn test_modify_returns_closure_result() {
    let (mut scene, _root, arm, _hand) = three_levels();
    let width = scene.modify(arm, |object| {
        object.set_width(6.0);
        object.width()
    });

    assert_eq!(width, Some(6.0));
    assert_eq!(scene.get(arm).unwrap().world().width, 12.0);
}
