//! Static catalog and recommendation pool used until the marketplace API
//! is wired. Data only.

use crate::domain::models::{
    RecommendationItem, RecommendationType, SearchResult, SearchResultType, Urgency,
};

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn entry(
    id: &str,
    result_type: SearchResultType,
    title: &str,
    subtitle: Option<&str>,
    tag_values: &[&str],
) -> SearchResult {
    SearchResult {
        id: id.to_string(),
        result_type,
        title: title.to_string(),
        subtitle: subtitle.map(str::to_string),
        rating: None,
        price: None,
        distance: None,
        availability: None,
        tags: tags(tag_values),
    }
}

pub fn search_catalog() -> Vec<SearchResult> {
    use SearchResultType::*;

    let mut plumber = entry(
        "svc-plomberie",
        Service,
        "Plomberie",
        Some("Réparation de fuites, installation sanitaire"),
        &["plomberie", "fuite", "sanitaire", "urgence"],
    );
    plumber.rating = Some(4.8);
    plumber.price = Some(150);
    plumber.availability = Some("Disponible aujourd'hui".to_string());

    let mut electricity = entry(
        "svc-electricite",
        Service,
        "Électricité",
        Some("Dépannage, mise aux normes, éclairage"),
        &["électricité", "dépannage", "éclairage"],
    );
    electricity.rating = Some(4.7);
    electricity.price = Some(180);

    let mut cleaning = entry(
        "svc-menage",
        Service,
        "Ménage à domicile",
        Some("Nettoyage régulier ou ponctuel"),
        &["ménage", "nettoyage", "maison"],
    );
    cleaning.rating = Some(4.9);
    cleaning.price = Some(120);
    cleaning.availability = Some("Disponible demain".to_string());

    let mut gardening = entry(
        "svc-jardinage",
        Service,
        "Jardinage",
        Some("Tonte, taille de haies, entretien"),
        &["jardinage", "extérieur", "entretien"],
    );
    gardening.rating = Some(4.6);
    gardening.price = Some(200);

    let mut painting = entry(
        "svc-peinture",
        Service,
        "Peinture",
        Some("Peinture intérieure et extérieure, tadelakt"),
        &["peinture", "rénovation", "tadelakt"],
    );
    painting.rating = Some(4.5);
    painting.price = Some(250);

    let mut ac = entry(
        "svc-climatisation",
        Service,
        "Climatisation",
        Some("Installation et entretien de climatiseurs"),
        &["climatisation", "entretien", "été"],
    );
    ac.rating = Some(4.4);
    ac.price = Some(300);

    let mut youssef = entry(
        "pro-youssef",
        Professional,
        "Youssef El Amrani",
        Some("Plombier à Casablanca, Maarif"),
        &["plomberie", "casablanca", "certifié"],
    );
    youssef.rating = Some(4.9);
    youssef.distance = Some(1.2);
    youssef.availability = Some("Disponible maintenant".to_string());

    let mut fatima = entry(
        "pro-fatima",
        Professional,
        "Fatima Zahra Bennani",
        Some("Aide ménagère à Rabat, Agdal"),
        &["ménage", "rabat", "repassage"],
    );
    fatima.rating = Some(4.8);
    fatima.distance = Some(2.4);

    let mut karim = entry(
        "pro-karim",
        Professional,
        "Karim Tazi",
        Some("Électricien à Marrakech, Guéliz"),
        &["électricité", "marrakech", "domotique"],
    );
    karim.rating = Some(4.7);
    karim.distance = Some(3.1);

    let mut hassan = entry(
        "pro-hassan",
        Professional,
        "Hassan Ouazzani",
        Some("Jardinier paysagiste à Casablanca, Anfa"),
        &["jardinage", "casablanca", "paysagisme"],
    );
    hassan.rating = Some(4.3);
    hassan.distance = Some(5.8);

    vec![
        plumber,
        electricity,
        cleaning,
        gardening,
        painting,
        ac,
        youssef,
        fatima,
        karim,
        hassan,
        entry("loc-casablanca", Location, "Casablanca", Some("Grand Casablanca"), &["casa", "ville"]),
        entry("loc-rabat", Location, "Rabat", Some("Rabat-Salé-Kénitra"), &["ville", "capitale"]),
        entry("loc-marrakech", Location, "Marrakech", Some("Marrakech-Safi"), &["ville", "médina"]),
        entry("loc-tanger", Location, "Tanger", Some("Tanger-Tétouan-Al Hoceïma"), &["ville", "nord"]),
        entry("cat-reparations", Category, "Réparations", Some("Plomberie, électricité, serrurerie"), &["plomberie", "électricité", "serrurerie"]),
        entry("cat-entretien", Category, "Entretien de la maison", Some("Ménage, jardinage, piscine"), &["ménage", "jardinage", "piscine"]),
    ]
}

pub fn popular_searches() -> Vec<String> {
    ["Plombier", "Ménage", "Électricien", "Climatisation", "Peinture"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn recommendation(
    id: &str,
    item_type: RecommendationType,
    title: &str,
    reason: &str,
    tag_values: &[&str],
) -> RecommendationItem {
    RecommendationItem {
        id: id.to_string(),
        item_type,
        title: title.to_string(),
        subtitle: None,
        rating: None,
        price: None,
        original_price: None,
        discount: None,
        distance: None,
        availability: None,
        reason: reason.to_string(),
        tags: tags(tag_values),
        urgency: None,
        popularity: None,
        match_score: None,
    }
}

pub fn recommendation_pool() -> Vec<RecommendationItem> {
    use RecommendationType::*;

    let mut leak = recommendation(
        "rec-fuite",
        Service,
        "Réparation de fuite express",
        "Basé sur votre recherche « plombier »",
        &["plomberie", "urgence"],
    );
    leak.subtitle = Some("Intervention en moins de 2h".to_string());
    leak.rating = Some(4.8);
    leak.price = Some(180);
    leak.distance = Some(1.2);
    leak.urgency = Some(Urgency::High);
    leak.match_score = Some(95.0);
    leak.availability = Some("Disponible maintenant".to_string());

    let mut youssef = recommendation(
        "rec-youssef",
        Professional,
        "Youssef El Amrani",
        "Plombier le mieux noté près de chez vous",
        &["plomberie", "certifié"],
    );
    youssef.subtitle = Some("Plombier · Maarif".to_string());
    youssef.rating = Some(4.9);
    youssef.distance = Some(0.5);
    youssef.urgency = Some(Urgency::High);
    youssef.match_score = Some(95.0);

    let mut spring = recommendation(
        "rec-grand-menage",
        Deal,
        "Grand ménage de printemps",
        "Offre limitée cette semaine",
        &["ménage", "nettoyage", "printemps"],
    );
    spring.price = Some(350);
    spring.original_price = Some(500);
    spring.discount = Some(30);
    spring.urgency = Some(Urgency::Medium);
    spring.popularity = Some(92.0);
    spring.distance = Some(2.0);

    let mut ac = recommendation(
        "rec-clim",
        Trending,
        "Entretien climatisation",
        "Très demandé avant l'été",
        &["climatisation", "entretien", "été"],
    );
    ac.price = Some(250);
    ac.popularity = Some(89.0);
    ac.urgency = Some(Urgency::Medium);
    ac.distance = Some(4.2);

    let mut garden = recommendation(
        "rec-jardin",
        Service,
        "Entretien de jardin",
        "Saisonnier",
        &["jardinage", "automne"],
    );
    garden.rating = Some(4.6);
    garden.price = Some(200);
    garden.match_score = Some(78.0);
    garden.urgency = Some(Urgency::Low);
    garden.distance = Some(3.5);

    let mut fatima = recommendation(
        "rec-fatima",
        Professional,
        "Fatima Zahra Bennani",
        "Recommandée par vos voisins",
        &["ménage", "repassage"],
    );
    fatima.subtitle = Some("Aide ménagère · Agdal".to_string());
    fatima.rating = Some(4.8);
    fatima.match_score = Some(88.0);
    fatima.distance = Some(2.4);

    let mut paint = recommendation(
        "rec-peinture",
        Deal,
        "Peinture salon marocain",
        "−20% pour les nouveaux clients",
        &["peinture", "rénovation", "tadelakt"],
    );
    paint.price = Some(1200);
    paint.original_price = Some(1500);
    paint.discount = Some(20);
    paint.popularity = Some(75.0);

    let mut electric = recommendation(
        "rec-electricite",
        Service,
        "Mise aux normes électriques",
        "Souvent réservé avec la plomberie",
        &["électricité", "sécurité"],
    );
    electric.rating = Some(4.7);
    electric.price = Some(400);
    electric.match_score = Some(82.0);
    electric.urgency = Some(Urgency::Medium);
    electric.distance = Some(3.1);

    let mut pool_cleaning = recommendation(
        "rec-piscine",
        Trending,
        "Nettoyage de piscine",
        "Tendance à Marrakech",
        &["piscine", "entretien", "été"],
    );
    pool_cleaning.price = Some(300);
    pool_cleaning.popularity = Some(70.0);
    pool_cleaning.distance = Some(8.0);

    let mut locksmith = recommendation(
        "rec-serrurerie",
        Service,
        "Serrurier 24h/24",
        "Service d'urgence",
        &["serrurerie", "urgence"],
    );
    locksmith.rating = Some(4.5);
    locksmith.price = Some(200);
    locksmith.popularity = Some(81.0);
    locksmith.urgency = Some(Urgency::High);

    vec![
        leak,
        youssef,
        spring,
        ac,
        garden,
        fatima,
        paint,
        electric,
        pool_cleaning,
        locksmith,
    ]
}
