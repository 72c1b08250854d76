mod invariants_tests;
