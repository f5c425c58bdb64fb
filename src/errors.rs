use error_chain::error_chain;

error_chain! {
    foreign_links {
        HttpRequest(reqwest::Error);
        Json(serde_json::Error);
    }

    errors {
        MissingWebhookUrl {
            description("webhook url is required"),
            display("Discord webhook URL is required. Set DISCORD_WEBHOOK_URL in your .env or pass it to the constructor."),
        }
    }
}
