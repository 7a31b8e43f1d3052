mod ports_tests;
mod redirects_tests;
