// Search integration tests

mod test_covers;
