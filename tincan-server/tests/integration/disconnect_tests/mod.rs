mod test_disconnect_notifies_survivor;
mod test_leave_then_disconnect;
