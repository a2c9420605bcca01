use persistent_treap::demo;

fn main() {
    env_logger::init();
    println!("{}", demo::nested_reference_count());
}
