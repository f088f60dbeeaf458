//! Sleep tracking
//!
//! Rapier only exposes a `sleeping` flag per body. Transitions of that flag
//! become `DormancyChanged` messages, which drive the `SleepCounter`; when
//! every letter is asleep an earthquake wakes them up.
//!
//! The counter only catches up once the woken bodies report back, so the
//! trigger can fire on several consecutive frames after the scene first goes
//! quiet.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::scene::types::*;

/// Emit a message for every letter whose sleep state flipped since last frame
pub fn track_dormancy(
    mut letters: Query<(Entity, &Sleeping, &mut Dormancy), With<Letter>>,
    mut changes: MessageWriter<DormancyChanged>,
) {
    for (entity, sleeping, mut dormancy) in letters.iter_mut() {
        if sleeping.sleeping != dormancy.dormant {
            dormancy.dormant = sleeping.sleeping;
            changes.write(DormancyChanged {
                entity,
                dormant: sleeping.sleeping,
            });
        }
    }
}

/// Fold dormancy notifications into the running count
pub fn count_dormant_letters(
    mut changes: MessageReader<DormancyChanged>,
    letters: Query<(), With<Letter>>,
    mut counter: ResMut<SleepCounter>,
) {
    let total = letters.iter().count();
    for change in changes.read() {
        counter.record(change.dormant, total);
        debug!("Dormant letters: {}/{}", counter.count(), total);
    }
    if counter.count() > total {
        counter.clamp_to(total);
    }
}

/// Shake the scene when every tracked letter is dormant
pub fn trigger_earthquake_when_all_dormant(
    counter: Res<SleepCounter>,
    letters: Query<(), With<Letter>>,
    mut earthquakes: MessageWriter<Earthquake>,
) {
    let total = letters.iter().count();
    // With nothing tracked there is nothing to wake.
    if total == 0 || !counter.all_dormant(total) {
        return;
    }
    info!("All {} letters dormant, shaking them awake", total);
    earthquakes.write(Earthquake {
        cause: EarthquakeCause::AllDormant,
    });
}
