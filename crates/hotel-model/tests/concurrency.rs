//! Concurrent access to a room's attribute set.

use std::thread;

use hotel_model::{Attribute, Room, RoomNumber};

#[test]
fn membership_checks_run_alongside_additions() {
    let room = Room::new(RoomNumber::new(42));
    room.add_attribute(Attribute::from("base"));

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..200 {
                    assert!(room.satisfies(&[Attribute::from("base")]));
                }
            });
        }
        scope.spawn(|| {
            for i in 0..200 {
                room.add_attribute(Attribute::new(format!("tag-{i}")));
            }
        });
    });

    // base plus the 200 added tags
    assert_eq!(room.attributes().len(), 201);
}

#[test]
fn snapshots_are_detached_from_the_room() {
    let room = Room::new(RoomNumber::new(7));
    room.add_attribute(Attribute::from("a"));

    let snapshot = room.attributes();
    room.add_attribute(Attribute::from("b"));

    assert_eq!(snapshot.len(), 1);
    assert_eq!(room.attributes().len(), 2);
}
