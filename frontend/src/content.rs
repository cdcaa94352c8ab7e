//! Static storefront content: blog articles and contact-form options.

use shared::BlogPost;

/// Reasons offered by the contact form.
pub const CONTACT_REASONS: [&str; 4] = [
    "Commande",
    "Programme nutritionnel",
    "Partenariat",
    "Autre",
];

/// Blog articles shipped with the frontend.
pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "bp1".to_string(),
            title: "Pourquoi remplacer le sucre raffiné par les dattes ?".to_string(),
            excerpt: "Le sucre des dattes arrive avec ses fibres, ses minéraux et un index glycémique bien plus doux.".to_string(),
            content: "Le sucre raffiné fournit des calories vides et provoque des pics de glycémie. \
                      Les dattes Medjool, elles, apportent la même douceur accompagnée de fibres, de \
                      potassium et de magnésium. Dans nos energy balls et nos muffins, elles remplacent \
                      intégralement le sucre blanc : l'énergie est diffusée plus lentement et la satiété \
                      dure plus longtemps."
                .to_string(),
            date: "2025-03-12".to_string(),
            image: "https://images.unsplash.com/photo-1587049352846-4a222e784d38?auto=format&fit=crop&q=80&w=800".to_string(),
            author: "Équipe HealthyBite".to_string(),
        },
        BlogPost {
            id: "bp2".to_string(),
            title: "Bien choisir sa collation avant le sport".to_string(),
            excerpt: "Ce que vous mangez 45 minutes avant l'effort change la qualité de votre séance.".to_string(),
            content: "Une bonne collation pré-entraînement combine des glucides à diffusion lente et \
                      une petite dose de protéines. Une barre de granola au miel ou deux energy balls \
                      aux amandes, 45 minutes avant la séance, suffisent. Évitez les graisses lourdes \
                      juste avant l'effort : elles ralentissent la digestion.".to_string(),
            date: "2025-02-03".to_string(),
            image: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?auto=format&fit=crop&q=80&w=800".to_string(),
            author: "Équipe HealthyBite".to_string(),
        },
        BlogPost {
            id: "bp3".to_string(),
            title: "Une semaine de petits-déjeuners sains et marocains".to_string(),
            excerpt: "Amlou, flocons d'avoine et miel de l'Atlas : sept idées pour démarrer la journée.".to_string(),
            content: "Le petit-déjeuner marocain traditionnel regorge d'options saines quand on choisit \
                      bien : amlou sur pain complet, msemen à la farine d'orge, fruits de saison et \
                      fruits secs. Nous avons composé sept matins types qui couvrent les besoins en \
                      fibres et en protéines sans sucre ajouté.".to_string(),
            date: "2025-01-20".to_string(),
            image: "https://images.unsplash.com/photo-1533089860892-a7c6f0a88666?auto=format&fit=crop&q=80&w=800".to_string(),
            author: "Équipe HealthyBite".to_string(),
        },
    ]
}
