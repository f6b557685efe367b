mod test_duplicate_create_rejected;
mod test_leave_deletes_empty_room;
mod test_room_full;
