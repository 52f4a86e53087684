mod generate_tests;
