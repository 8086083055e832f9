// third-party imports
use criterion::criterion_main;

const GROUP: &str = "listmatch";
const ND: &str = ":"; // name delimiter

mod list;
mod matcher;

criterion_main!(matcher::benches, list::benches);
