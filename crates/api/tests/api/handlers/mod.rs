mod hotel_test;
mod middleware_test;
mod reservation_test;
mod root_test;
