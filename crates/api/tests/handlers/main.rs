mod health_test;
mod planning_test;
mod slots_test;
mod test_utils;
