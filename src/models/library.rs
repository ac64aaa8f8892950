//! Sample dashboard, history, social and profile content served to the frontend.

use super::Mood;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct FeaturedPlaylist {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub mood: Mood,
    pub song_count: u32,
    pub duration: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentTrack {
    pub title: &'static str,
    pub artist: &'static str,
    pub mood: Mood,
    pub duration: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MoodShare {
    pub mood: Mood,
    pub percentage: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyMoods {
    pub day: &'static str,
    pub happy: u8,
    pub sad: u8,
    pub chill: u8,
    pub energetic: u8,
    pub focused: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopTrack {
    pub title: &'static str,
    pub artist: &'static str,
    pub plays: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoodTopTracks {
    pub mood: Mood,
    pub tracks: Vec<TopTrack>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardContent {
    pub playlists: Vec<FeaturedPlaylist>,
    pub recent_tracks: Vec<RecentTrack>,
    pub weekly_breakdown: Vec<MoodShare>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryContent {
    pub daily: Vec<DailyMoods>,
    pub distribution: Vec<MoodShare>,
    pub top_tracks: Vec<MoodTopTracks>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Friend {
    pub id: u32,
    pub name: &'static str,
    pub current_song: &'static str,
    pub artist: &'static str,
    pub mood: Mood,
    pub online: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SharedPlaylist {
    pub title: &'static str,
    pub songs: u32,
    pub mood: Mood,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedPost {
    pub id: u32,
    pub author: &'static str,
    pub content: &'static str,
    pub playlist: SharedPlaylist,
    pub likes: u32,
    pub comments: u32,
    pub time_ago: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoodMatch {
    pub id: u32,
    pub name: &'static str,
    pub match_percentage: u8,
    pub top_mood: Mood,
    pub mutual_genres: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialContent {
    pub friends: Vec<Friend>,
    pub feed_posts: Vec<FeedPost>,
    pub mood_matches: Vec<MoodMatch>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub name: &'static str,
    pub email: &'static str,
    pub joined: &'static str,
    pub preferred_moods: Vec<Mood>,
    pub favorite_genres: Vec<&'static str>,
    pub total_listened: u32,
    pub total_playlists: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserPlaylist {
    pub id: u32,
    pub title: &'static str,
    pub songs: u32,
    pub mood: Mood,
    pub listens: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopSong {
    pub title: &'static str,
    pub artist: &'static str,
    pub mood: Mood,
    pub plays: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileContent {
    pub user: UserSummary,
    pub playlists: Vec<UserPlaylist>,
    pub top_songs: Vec<TopSong>,
}

impl DashboardContent {
    pub fn sample() -> Self {
        Self {
            playlists: vec![
                FeaturedPlaylist {
                    id: 1,
                    title: "Morning Energy Boost",
                    description: "Start your day with uplifting beats",
                    mood: Mood::Energetic,
                    song_count: 14,
                    duration: "58 min",
                },
                FeaturedPlaylist {
                    id: 2,
                    title: "Calm Focus",
                    description: "Concentration-enhancing instrumental tracks",
                    mood: Mood::Focused,
                    song_count: 18,
                    duration: "1h 12min",
                },
                FeaturedPlaylist {
                    id: 3,
                    title: "Afternoon Chill",
                    description: "Relaxing beats for your afternoon break",
                    mood: Mood::Chill,
                    song_count: 12,
                    duration: "47 min",
                },
                FeaturedPlaylist {
                    id: 4,
                    title: "Happy Vibes",
                    description: "Feel-good tracks to boost your mood",
                    mood: Mood::Happy,
                    song_count: 15,
                    duration: "52 min",
                },
            ],
            recent_tracks: vec![
                recent("Mind Elevation", "Cosmic Dreams", Mood::Focused, "3:42"),
                recent("Ocean Flow", "Wave Collective", Mood::Chill, "4:18"),
                recent("Sunrise Rhythm", "Morning Beats", Mood::Energetic, "3:24"),
                recent("Gentle Rain", "Nature Sounds", Mood::Chill, "5:17"),
                recent("Positive Energy", "Good Vibes", Mood::Happy, "3:55"),
            ],
            weekly_breakdown: vec![
                share(Mood::Energetic, 35),
                share(Mood::Happy, 25),
                share(Mood::Focused, 20),
                share(Mood::Chill, 15),
                share(Mood::Sad, 5),
            ],
        }
    }
}

impl HistoryContent {
    pub fn sample() -> Self {
        Self {
            daily: vec![
                daily("Mon", [15, 5, 40, 30, 10]),
                daily("Tue", [25, 10, 20, 25, 20]),
                daily("Wed", [20, 5, 15, 40, 20]),
                daily("Thu", [10, 15, 30, 20, 25]),
                daily("Fri", [30, 5, 15, 35, 15]),
                daily("Sat", [35, 0, 25, 25, 15]),
                daily("Sun", [20, 0, 45, 15, 20]),
            ],
            distribution: vec![
                share(Mood::Chill, 32),
                share(Mood::Energetic, 27),
                share(Mood::Happy, 22),
                share(Mood::Focused, 15),
                share(Mood::Sad, 4),
            ],
            top_tracks: vec![
                top(Mood::Happy, [("Sunny Day", "Bright Lights", 12), ("Good Vibes", "Happy Collective", 10), ("Uplift", "Sky High", 8)]),
                top(Mood::Sad, [("Rainy Night", "Melancholy Dreams", 7), ("Missing You", "Lost Soul", 5), ("Empty Room", "Echo Chamber", 4)]),
                top(Mood::Chill, [("Gentle Waves", "Ocean Sounds", 15), ("Evening Breeze", "Calm Collective", 13), ("Sunset Lounge", "Relaxation", 11)]),
                top(Mood::Energetic, [("Power Up", "Energy Boost", 14), ("Morning Rush", "Fast Lane", 11), ("Workout Peak", "Fitness Beats", 9)]),
                top(Mood::Focused, [("Deep Focus", "Brain Waves", 18), ("Concentration", "Mind Flow", 14), ("Work Mode", "Productivity", 12)]),
            ],
        }
    }
}

impl SocialContent {
    pub fn sample() -> Self {
        Self {
            friends: vec![
                friend(1, "Alex Johnson", "Ocean Waves", "Coastal Dreams", Mood::Chill, true),
                friend(2, "Taylor Smith", "Electric Feel", "Voltage", Mood::Energetic, true),
                friend(3, "Jordan Lee", "Midnight Blues", "Moonlight Quartet", Mood::Sad, false),
                friend(4, "Casey Wilson", "Happy Days", "The Sunshine Band", Mood::Happy, true),
            ],
            feed_posts: vec![
                FeedPost {
                    id: 1,
                    author: "Alex Johnson",
                    content: "Just discovered this amazing playlist for studying! Perfect focus vibes.",
                    playlist: SharedPlaylist { title: "Deep Focus", songs: 18, mood: Mood::Focused },
                    likes: 24,
                    comments: 5,
                    time_ago: "2 hours ago",
                },
                FeedPost {
                    id: 2,
                    author: "Taylor Smith",
                    content: "Feeling the energy today! Who wants to collaborate on a workout playlist?",
                    playlist: SharedPlaylist { title: "Workout Intensity", songs: 15, mood: Mood::Energetic },
                    likes: 18,
                    comments: 7,
                    time_ago: "4 hours ago",
                },
                FeedPost {
                    id: 3,
                    author: "Jordan Lee",
                    content: "Rainy day calls for some chill beats. Here's what I'm listening to right now.",
                    playlist: SharedPlaylist { title: "Rainy Day Vibes", songs: 22, mood: Mood::Chill },
                    likes: 32,
                    comments: 9,
                    time_ago: "6 hours ago",
                },
            ],
            mood_matches: vec![
                MoodMatch {
                    id: 1,
                    name: "Riley Morgan",
                    match_percentage: 94,
                    top_mood: Mood::Chill,
                    mutual_genres: vec!["Indie", "Lo-fi", "Ambient"],
                },
                MoodMatch {
                    id: 2,
                    name: "Jamie Parker",
                    match_percentage: 88,
                    top_mood: Mood::Energetic,
                    mutual_genres: vec!["Electronic", "Dance", "House"],
                },
                MoodMatch {
                    id: 3,
                    name: "Quinn Davis",
                    match_percentage: 82,
                    top_mood: Mood::Happy,
                    mutual_genres: vec!["Pop", "R&B", "Indie Pop"],
                },
            ],
        }
    }
}

impl ProfileContent {
    pub fn sample() -> Self {
        Self {
            user: UserSummary {
                name: "Alex Johnson",
                email: "alex@example.com",
                joined: "January 2023",
                preferred_moods: vec![Mood::Chill, Mood::Energetic, Mood::Focused],
                favorite_genres: vec!["Electronic", "Indie", "Hip-Hop", "Jazz"],
                total_listened: 1243,
                total_playlists: 18,
            },
            playlists: vec![
                UserPlaylist { id: 1, title: "Morning Boost", songs: 14, mood: Mood::Energetic, listens: 87 },
                UserPlaylist { id: 2, title: "Study Session", songs: 24, mood: Mood::Focused, listens: 156 },
                UserPlaylist { id: 3, title: "Evening Relaxation", songs: 18, mood: Mood::Chill, listens: 63 },
                UserPlaylist { id: 4, title: "Weekend Vibes", songs: 22, mood: Mood::Happy, listens: 112 },
            ],
            top_songs: vec![
                TopSong { title: "Electric Dreams", artist: "Synth Collective", mood: Mood::Energetic, plays: 32 },
                TopSong { title: "Deep Thought", artist: "Mindwave", mood: Mood::Focused, plays: 28 },
                TopSong { title: "Coastal Breeze", artist: "Ocean Sounds", mood: Mood::Chill, plays: 24 },
                TopSong { title: "Summer Days", artist: "Sunshine Beat", mood: Mood::Happy, plays: 21 },
                TopSong { title: "Rainy Night", artist: "Ambient Dreams", mood: Mood::Sad, plays: 19 },
            ],
        }
    }
}

fn friend(
    id: u32,
    name: &'static str,
    current_song: &'static str,
    artist: &'static str,
    mood: Mood,
    online: bool,
) -> Friend {
    Friend { id, name, current_song, artist, mood, online }
}

fn recent(title: &'static str, artist: &'static str, mood: Mood, duration: &'static str) -> RecentTrack {
    RecentTrack { title, artist, mood, duration }
}

fn share(mood: Mood, percentage: u8) -> MoodShare {
    MoodShare { mood, percentage }
}

// Percentages in happy, sad, chill, energetic, focused order
fn daily(day: &'static str, p: [u8; 5]) -> DailyMoods {
    DailyMoods {
        day,
        happy: p[0],
        sad: p[1],
        chill: p[2],
        energetic: p[3],
        focused: p[4],
    }
}

fn top(mood: Mood, tracks: [(&'static str, &'static str, u32); 3]) -> MoodTopTracks {
    MoodTopTracks {
        mood,
        tracks: tracks
            .into_iter()
            .map(|(title, artist, plays)| TopTrack { title, artist, plays })
            .collect(),
    }
}
