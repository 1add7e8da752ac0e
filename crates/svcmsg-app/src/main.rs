#[tokio::main]
async fn main() -> anyhow::Result<()> {
    svcmsg_lib::server::start_server().await
}
