use super::*;

fn platform(name: &str, slug: &str) -> CreatePlatformParam {
    CreatePlatformParam {
        name: name.to_string(),
        slug: slug.to_string(),
        active: true,
    }
}

/// Tests creating platforms with supported, unsupported and duplicate slugs.
///
/// Expected: Ok, Err(BadRequest), Err(Conflict)
#[tokio::test]
async fn validates_slug() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Platform).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PlatformService::new(db);

    let created = service.create(platform("TikTok", " TikTok ")).await?;
    assert_eq!(created.slug, "tiktok");

    assert!(matches!(
        service.create(platform("MySpace", "myspace")).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.create(platform("TikTok again", "tiktok")).await,
        Err(AppError::Conflict(_))
    ));

    Ok(())
}

/// Tests deactivating a platform.
///
/// Expected: hidden from the default listing, shown when inactive ones are included
#[tokio::test]
async fn deactivated_platform_is_hidden() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Platform).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PlatformService::new(db);
    let youtube = service.create(platform("YouTube", "youtube")).await?;
    service.create(platform("Instagram", "instagram")).await?;

    service
        .update(
            youtube.id,
            UpdatePlatformParam {
                name: "YouTube".to_string(),
                active: false,
            },
        )
        .await?;

    assert_eq!(service.get_all(false).await?.len(), 1);
    assert_eq!(service.get_all(true).await?.len(), 2);

    Ok(())
}

/// Tests managing services on a platform.
///
/// Expected: created services are listed per platform; an unknown platform is Err(NotFound)
#[tokio::test]
async fn manages_services_per_platform() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Platform)
        .with_table(Service)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let instagram = factory::create_platform_with_slug(db, "instagram").await?;
    let service = ServiceItemService::new(db);

    let reel = service
        .create(
            instagram.id,
            SaveServiceItemParam {
                name: "Reel".to_string(),
                description: Some("30-60 second video".to_string()),
            },
        )
        .await?;

    let listed = service.get_by_platform(instagram.id).await?;
    assert_eq!(listed, vec![reel.clone()]);

    assert!(matches!(
        service.get_by_platform(999).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service
            .update(
                reel.id,
                SaveServiceItemParam {
                    name: String::new(),
                    description: None
                }
            )
            .await,
        Err(AppError::BadRequest(_))
    ));

    service.delete(reel.id).await?;
    assert!(service.get_by_platform(instagram.id).await?.is_empty());

    Ok(())
}
