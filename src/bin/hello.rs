use lambda_runtime::lambda;

fn main() {
    simple_logger::init_with_level(hello_world_lambda::log_level())
        .expect("Failed to init logger");
    lambda!(hello_world_lambda::handler);
}
