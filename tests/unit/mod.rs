pub mod map_tests;
