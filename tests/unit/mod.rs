mod solver_tests;
