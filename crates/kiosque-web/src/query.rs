use kiosque_lib::models::SearchRecord;

pub async fn search(url: &str) -> Result<Vec<SearchRecord>, anyhow::Error> {
    let client = reqwest::Client::new();

    let res = client.get(url).send().await?.error_for_status()?;
    let records: Vec<SearchRecord> = res.json().await?;

    Ok(records)
}
