use discord_webhooks::WebhookMessage;

#[tokio::main]
async fn main() -> discord_webhooks::Result<()> {
    env_logger::init();

    let message = WebhookMessage::from_env(None)?
        .content("Deployment finished")
        .add_embed_with(|e| {
            e.title_with_url("build #42", "https://example.com/builds/42")
                .description("All checks passed.")
                .color(0x57F287)
                .add_field("Duration", "3m 12s", true)
                .add_field("Commits", "7", true)
                .footer("ci-bot")
                .timestamp_now()
        });

    if message.send().await {
        println!("webhook delivered");
    } else {
        println!("webhook failed, see logs");
    }

    Ok(())
}
