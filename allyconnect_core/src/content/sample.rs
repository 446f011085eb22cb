use super::*;

const HERO_IMAGE: &str = "/assets/hero-image.jpg";

fn link(label: &str, href: &str) -> NavLink {
    NavLink {
        label: label.into(),
        href: href.into(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(super) fn landing() -> LandingContent {
    LandingContent {
        slides: slides(),
        stats: vec![
            HeroStat {
                glyph: Glyph::Users,
                label: "Active Alumni".into(),
                value: "2,500+".into(),
            },
            HeroStat {
                glyph: Glyph::Calendar,
                label: "Events This Year".into(),
                value: "150+".into(),
            },
            HeroStat {
                glyph: Glyph::Briefcase,
                label: "Opportunities".into(),
                value: "300+".into(),
            },
        ],
        events: events(),
        opportunities: opportunities(),
        spotlight: spotlight(),
        leaderboard: leaderboard(),
        monthly: MonthlyTotals {
            total_points: 15_420,
            active_contributors: 127,
            doubts_resolved: 284,
        },
        nav_links: vec![
            link("Events", "/events"),
            link("Opportunities", "/opportunities"),
            link("Alumni", "/alumni"),
            link("Leaderboard", "/leaderboard"),
        ],
        unread: UnreadCounts {
            notifications: 3,
            messages: 2,
        },
        viewer: None,
        about: "Bridging the gap between alumni and students, fostering meaningful connections, \
                mentorship, and opportunities for growth in our vibrant community."
            .into(),
        footer_sections: vec![
            FooterSection {
                title: "Platform".into(),
                links: vec![
                    link("Events", "/events"),
                    link("Opportunities", "/opportunities"),
                    link("Alumni Directory", "/alumni"),
                    link("Leaderboard", "/leaderboard"),
                    link("Chat", "/messages"),
                ],
            },
            FooterSection {
                title: "Community".into(),
                links: vec![
                    link("About Us", "/about"),
                    link("Success Stories", "/stories"),
                    link("Mentorship", "/mentorship"),
                    link("Volunteer", "/volunteer"),
                    link("Donate", "/donate"),
                ],
            },
            FooterSection {
                title: "Support".into(),
                links: vec![
                    link("Help Center", "/help"),
                    link("Contact Us", "/contact"),
                    link("Privacy Policy", "/privacy"),
                    link("Terms of Service", "/terms"),
                    link("Guidelines", "/guidelines"),
                ],
            },
        ],
        social_links: [
            (Glyph::Facebook, "Facebook"),
            (Glyph::Twitter, "Twitter"),
            (Glyph::Linkedin, "LinkedIn"),
            (Glyph::Instagram, "Instagram"),
        ]
        .into_iter()
        .map(|(glyph, label)| SocialLink {
            glyph,
            label: label.into(),
            href: "#".into(),
        })
        .collect(),
        legal_links: vec![
            link("Accessibility", "/accessibility"),
            link("Sitemap", "/sitemap"),
            link("Careers", "/careers"),
            link("Press", "/press"),
            link("Developers", "/developers"),
        ],
        contact: ContactInfo {
            email: "connect@allyconnect.edu".into(),
            phone: "+1 (555) 123-4567".into(),
            address: "123 University Avenue, Education City, EC 12345".into(),
        },
    }
}

fn slides() -> Vec<Slide> {
    [
        (
            "Connect with Alumni Network",
            "Bridge the gap between current students and successful alumni. Get mentorship, \
             career guidance, and unlock opportunities.",
            "Join Network",
            "/signup",
        ),
        (
            "Annual Alumni Meet 2024",
            "Join us for the biggest networking event of the year. Connect, share experiences, \
             and celebrate achievements together.",
            "Register Now",
            "/events/alumni-meet-2024",
        ),
        (
            "100+ New Opportunities Posted",
            "Discover internships, jobs, and collaboration opportunities posted by our thriving \
             alumni community.",
            "Explore Jobs",
            "/opportunities",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (title, description, cta, cta_link))| Slide {
        id: (i + 1).to_string(),
        title: title.into(),
        description: description.into(),
        image: HERO_IMAGE.into(),
        cta: cta.into(),
        cta_link: cta_link.into(),
    })
    .collect()
}

fn events() -> Vec<EventCard> {
    let card = |id: &str,
                title: &str,
                description: &str,
                date: &str,
                time: &str,
                location: &str,
                (attendees, max_attendees): (u32, u32),
                featured: bool| EventCard {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        date: date.into(),
        time: time.into(),
        location: location.into(),
        attendees,
        max_attendees,
        image: "/api/placeholder/400/200".into(),
        status: EventStatus::Upcoming,
        featured,
    };

    vec![
        card(
            "1",
            "Tech Career Panel Discussion",
            "Join successful alumni from top tech companies as they share insights about \
             building a career in technology.",
            "Nov 15, 2024",
            "6:00 PM",
            "Main Auditorium",
            (85, 150),
            true,
        ),
        card(
            "2",
            "Startup Funding Workshop",
            "Learn about venture capital, angel investing, and funding strategies from \
             successful entrepreneurs.",
            "Nov 22, 2024",
            "2:00 PM",
            "Innovation Hub",
            (42, 80),
            false,
        ),
        card(
            "3",
            "Alumni Networking Mixer",
            "Casual networking event with refreshments, perfect for making new connections and \
             catching up.",
            "Nov 28, 2024",
            "7:00 PM",
            "Student Center",
            (120, 200),
            true,
        ),
    ]
}

fn opportunities() -> Vec<OpportunityCard> {
    vec![
        OpportunityCard {
            id: "1".into(),
            title: "Software Engineering Intern".into(),
            company: "TechCorp Solutions".into(),
            kind: OpportunityType::Internship,
            location: "San Francisco, CA".into(),
            description: "Join our engineering team to work on cutting-edge web applications \
                          using React, Node.js, and cloud technologies."
                .into(),
            requirements: strings(&["React.js", "Node.js", "JavaScript", "Git"]),
            posted_by: Poster {
                name: "Sarah Chen".into(),
                avatar: "/api/placeholder/40/40".into(),
                title: "Senior Software Engineer".into(),
            },
            posted_date: "2 days ago".into(),
            deadline: "Nov 30, 2024".into(),
            applicants: 23,
            featured: true,
        },
        OpportunityCard {
            id: "2".into(),
            title: "Product Manager".into(),
            company: "InnovateLabs".into(),
            kind: OpportunityType::Job,
            location: "New York, NY".into(),
            description: "Lead product strategy and development for our AI-powered analytics \
                          platform. Work with cross-functional teams."
                .into(),
            requirements: strings(&["Product Management", "Analytics", "Agile", "SQL"]),
            posted_by: Poster {
                name: "Michael Rodriguez".into(),
                avatar: "/api/placeholder/40/40".into(),
                title: "VP of Product".into(),
            },
            posted_date: "5 days ago".into(),
            deadline: "Dec 15, 2024".into(),
            applicants: 45,
            featured: false,
        },
        OpportunityCard {
            id: "3".into(),
            title: "Research Assistant".into(),
            company: "University Research Lab".into(),
            kind: OpportunityType::Volunteer,
            location: "Remote".into(),
            description: "Contribute to groundbreaking research in machine learning and \
                          artificial intelligence. Flexible hours, great learning opportunity."
                .into(),
            requirements: strings(&["Python", "Machine Learning", "Research", "Statistics"]),
            posted_by: Poster {
                name: "Dr. Emily Watson".into(),
                avatar: "/api/placeholder/40/40".into(),
                title: "Research Director".into(),
            },
            posted_date: "1 week ago".into(),
            deadline: "Dec 1, 2024".into(),
            applicants: 12,
            featured: true,
        },
    ]
}

fn spotlight() -> Vec<AlumniProfile> {
    vec![
        AlumniProfile {
            id: "1".into(),
            name: "Priya Sharma".into(),
            avatar: "/api/placeholder/80/80".into(),
            title: "Senior Software Engineer".into(),
            company: "Google".into(),
            location: "Mountain View, CA".into(),
            graduation_year: 2019,
            department: "Computer Science".into(),
            achievements: strings(&[
                "Tech Innovation Award",
                "Mentor of the Year",
                "Published 5 Research Papers",
            ]),
            bio: "Passionate about AI/ML and committed to giving back to the community through \
                  mentorship and knowledge sharing."
                .into(),
            points: 2450,
            verified: true,
        },
        AlumniProfile {
            id: "2".into(),
            name: "Arjun Patel".into(),
            avatar: "/api/placeholder/80/80".into(),
            title: "Co-Founder & CTO".into(),
            company: "TechStart Inc.".into(),
            location: "Bangalore, India".into(),
            graduation_year: 2017,
            department: "Information Technology".into(),
            achievements: strings(&["Forbes 30 Under 30", "Startup Success Story", "Angel Investor"]),
            bio: "Building the future of fintech while helping the next generation of \
                  entrepreneurs turn their ideas into reality."
                .into(),
            points: 3200,
            verified: true,
        },
        AlumniProfile {
            id: "3".into(),
            name: "Neha Singh".into(),
            avatar: "/api/placeholder/80/80".into(),
            title: "Product Manager".into(),
            company: "Microsoft".into(),
            location: "Seattle, WA".into(),
            graduation_year: 2020,
            department: "Business Administration".into(),
            achievements: strings(&[
                "Product Excellence Award",
                "Women in Tech Leader",
                "50+ Mentees",
            ]),
            bio: "Driving product innovation at scale and passionate about empowering women in \
                  technology through mentorship programs."
                .into(),
            points: 1890,
            verified: true,
        },
    ]
}

fn leaderboard() -> Vec<LeaderboardEntry> {
    [
        ("Arjun Patel", 2, 3200, "Information Technology", 2017, 12, (45, 8, 15)),
        ("Priya Sharma", 1, 2450, "Computer Science", 2019, 10, (38, 5, 12)),
        ("Rohan Kumar", 4, 2180, "Mechanical Engineering", 2018, 9, (32, 6, 8)),
        ("Neha Singh", 3, 1890, "Business Administration", 2020, 8, (28, 4, 10)),
        ("Vikram Gupta", 5, 1650, "Electrical Engineering", 2019, 7, (25, 3, 6)),
    ]
    .into_iter()
    .zip(1u32..)
    .map(
        |((name, previous_rank, points, department, graduation_year, badges, (doubts, events, posts)), rank)| {
            LeaderboardEntry {
                id: rank.to_string(),
                rank,
                previous_rank,
                name: name.into(),
                avatar: "/api/placeholder/48/48".into(),
                points,
                department: department.into(),
                graduation_year,
                badges,
                contributions: Contributions {
                    doubts_resolved: doubts,
                    events_hosted: events,
                    opportunities_posted: posts,
                },
            }
        },
    )
    .collect()
}
