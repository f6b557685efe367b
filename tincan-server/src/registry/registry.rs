use crate::registry::error::RegistryError;
use crate::registry::room::Room;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;
use tincan_core::{ConnId, RoomId};

/// Outcome of removing a connection from a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// Room absent or the connection was not a member. Nothing changed.
    NotMember,
    /// The connection left and at least one participant remains. Carries
    /// the new creator when ownership moved to the survivor.
    Remaining { new_creator: Option<ConnId> },
    /// The connection was the last participant; the room is gone.
    Deleted,
}

/// Authoritative map of live rooms. All membership mutations go through
/// here; each operation runs under the room's shard entry lock, so two
/// operations on the same room never interleave.
#[derive(Clone, Default)]
pub struct RoomRegistry {
    rooms: Arc<DashMap<RoomId, Room>>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, room_id: &RoomId, conn_id: &ConnId) -> Result<(), RegistryError> {
        match self.rooms.entry(room_id.clone()) {
            Entry::Occupied(_) => Err(RegistryError::AlreadyExists),
            Entry::Vacant(slot) => {
                slot.insert(Room::new(conn_id.clone()));
                Ok(())
            }
        }
    }

    /// Admit `conn_id` into an existing room. Returns the current creator,
    /// the target for the joined notification.
    pub fn join(&self, room_id: &RoomId, conn_id: &ConnId) -> Result<ConnId, RegistryError> {
        let mut room = self.rooms.get_mut(room_id).ok_or(RegistryError::NotFound)?;
        if room.is_full() {
            return Err(RegistryError::Full);
        }
        room.participants.push(conn_id.clone());
        Ok(room.creator.clone())
    }

    /// Remove `conn_id` from a room, deleting the room the moment it empties
    /// and handing creator status to the survivor otherwise.
    pub fn remove(&self, room_id: &RoomId, conn_id: &ConnId) -> RemovalOutcome {
        match self.rooms.entry(room_id.clone()) {
            Entry::Vacant(_) => RemovalOutcome::NotMember,
            Entry::Occupied(mut slot) => {
                let room = slot.get_mut();
                if !room.contains(conn_id) {
                    return RemovalOutcome::NotMember;
                }
                room.participants.retain(|c| c != conn_id);
                if room.participants.is_empty() {
                    slot.remove();
                    return RemovalOutcome::Deleted;
                }
                let new_creator = if room.creator == *conn_id {
                    room.creator = room.participants[0].clone();
                    Some(room.creator.clone())
                } else {
                    None
                };
                RemovalOutcome::Remaining { new_creator }
            }
        }
    }

    /// Every room `conn_id` currently belongs to. A connection is expected
    /// to sit in at most one room, but the disconnect sweep must not assume
    /// that.
    pub fn rooms_containing(&self, conn_id: &ConnId) -> Vec<RoomId> {
        self.rooms
            .iter()
            .filter(|entry| entry.value().contains(conn_id))
            .map(|entry| entry.key().clone())
            .collect()
    }

    /// Snapshot of a room, for observation only.
    pub fn get(&self, room_id: &RoomId) -> Option<Room> {
        self.rooms.get(room_id).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
