use rocketreach_http::{RocketReachClient, RocketReachError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = RocketReachClient::from_env()?;

    let results = client
        .people_search()
        .name("John Doe")
        .current_employer("Google")
        .location("San Francisco")
        .page_size(10)
        .search()
        .await?;

    println!(
        "found {} of {} profiles (page {})",
        results.count(),
        results.total(),
        results.current_page()
    );
    for profile in results.profiles() {
        println!("- {} at {}", profile["name"], profile["current_employer"]);
    }

    match client
        .person_lookup()
        .name("John Doe")
        .current_employer("Google")
        .lookup()
        .await
    {
        Ok(person) => println!("{:?} ({:?})", person.name(), person.status()),
        Err(RocketReachError::RateLimited {
            retry_after_secs, ..
        }) => println!("rate limited, retry in {retry_after_secs}s"),
        Err(err) => return Err(err.into()),
    }

    let enriched = client
        .person_enrich()
        .linkedin_url("https://www.linkedin.com/in/johndoe")
        .enrich()
        .await?;
    println!(
        "{:?} works at {:?} ({:?})",
        enriched.person_name(),
        enriched.company_name(),
        enriched.company_domain()
    );

    Ok(())
}
