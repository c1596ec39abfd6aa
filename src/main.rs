use mototaxi_driver::components::App;
use mototaxi_driver::config::CONFIG;

fn main() {
    mototaxi_driver::init_logging();
    log::info!("🚀 Mototaxi motorista ({}) iniciando...", CONFIG.environment);

    yew::Renderer::<App>::new().render();
}
