//! Sample projects loaded into every fresh seeded store

use crate::portfolio::types::NewProject;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The fixed showcase created at startup, in insertion order
pub fn sample_projects() -> Vec<NewProject> {
    vec![
        NewProject {
            title: "N8N Workflow Automation".to_string(),
            description: "Advanced workflow automation platform with complex multi-step processes, API integrations, and real-time monitoring dashboard.".to_string(),
            long_description: Some("A comprehensive workflow automation solution built with N8N that streamlines business processes through intelligent automation. Features include complex multi-step workflows, third-party API integrations, real-time monitoring dashboard, and automated reporting systems.".to_string()),
            technologies: strings(&["N8N", "Node.js", "Docker", "PostgreSQL", "Redis"]),
            features: Some(strings(&[
                "Advanced user authentication system",
                "Real-time workflow monitoring",
                "Multi-step process automation",
                "Third-party API integrations",
                "Automated reporting dashboard",
            ])),
            category: "Automation".to_string(),
            status: "Live".to_string(),
            live_url: Some("https://n8n-demo.example.com".to_string()),
            github_url: Some("https://github.com/tusharvaghela/n8n-automation".to_string()),
            video_url: Some("https://example.com/demo-video.mp4".to_string()),
            image_url: Some("https://images.unsplash.com/photo-1558494949-ef010cbdcc31?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400".to_string()),
            featured: Some(true),
        },
        NewProject {
            title: "MERN E-Commerce Platform".to_string(),
            description: "Complete e-commerce solution with payment processing, inventory management, and advanced analytics dashboard.".to_string(),
            long_description: Some("A full-featured e-commerce platform built with the MERN stack, featuring secure payment processing, comprehensive inventory management, customer relationship management, and detailed analytics dashboard with real-time reporting.".to_string()),
            technologies: strings(&["React", "Node.js", "MongoDB", "Express.js", "Stripe", "JWT"]),
            features: Some(strings(&[
                "Secure payment processing with Stripe",
                "Advanced inventory management",
                "Customer relationship management",
                "Real-time analytics dashboard",
                "Mobile-responsive design",
            ])),
            category: "Full Stack".to_string(),
            status: "Live".to_string(),
            live_url: Some("https://ecommerce-demo.example.com".to_string()),
            github_url: Some("https://github.com/tusharvaghela/mern-ecommerce".to_string()),
            video_url: Some("https://example.com/ecommerce-demo.mp4".to_string()),
            image_url: Some("https://images.unsplash.com/photo-1517077304055-6e89abbf09b0?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400".to_string()),
            featured: Some(true),
        },
        NewProject {
            title: "React Native Fitness App".to_string(),
            description: "Cross-platform fitness tracking application with AI-powered workout recommendations and social features.".to_string(),
            long_description: Some("A comprehensive fitness tracking mobile application built with React Native and Expo. Features AI-powered workout recommendations, social networking capabilities, progress tracking, and integration with wearable devices.".to_string()),
            technologies: strings(&["React Native", "Expo", "Firebase", "TensorFlow", "Node.js"]),
            features: Some(strings(&[
                "AI-powered workout recommendations",
                "Social networking features",
                "Progress tracking and analytics",
                "Wearable device integration",
                "Cross-platform compatibility",
            ])),
            category: "Mobile".to_string(),
            status: "In Progress".to_string(),
            live_url: Some("https://fitness-app.example.com".to_string()),
            github_url: Some("https://github.com/tusharvaghela/fitness-app".to_string()),
            video_url: Some("https://example.com/fitness-demo.mp4".to_string()),
            image_url: Some("https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400".to_string()),
            featured: Some(true),
        },
    ]
}
