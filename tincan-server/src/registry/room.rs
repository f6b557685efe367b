use tincan_core::ConnId;

/// Maximum participants per room. The relay brokers 1:1 calls only.
pub const ROOM_CAPACITY: usize = 2;

/// One signaling session. The creator is the participant targeted by the
/// joined notification; it holds no other privilege and is handed over to
/// the survivor when the current creator departs.
#[derive(Debug, Clone)]
pub struct Room {
    pub(crate) creator: ConnId,
    pub(crate) participants: Vec<ConnId>,
}

impl Room {
    pub(crate) fn new(creator: ConnId) -> Self {
        Self {
            participants: vec![creator.clone()],
            creator,
        }
    }

    pub fn creator(&self) -> &ConnId {
        &self.creator
    }

    pub fn participants(&self) -> &[ConnId] {
        &self.participants
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= ROOM_CAPACITY
    }

    pub fn contains(&self, conn_id: &ConnId) -> bool {
        self.participants.contains(conn_id)
    }
}
