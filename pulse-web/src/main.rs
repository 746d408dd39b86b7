fn main() {
    dioxus::launch(pulse_web::App);
}
